use rocket::{State, delete, get, patch, post, put, http::Status, serde::json::Json};
use tracing::{debug, info, instrument};
use shared::{models::*, registry::VoteRegistry};

/// Mount point of the Connect procedures, `/<proto package>.<service>`.
pub const SERVICE_PATH: &str = "/voting.VotingService";

const PROCEDURES: [&str; 3] = ["GetVotingOptions", "Vote", "GetResults"];

fn voting_options(registry: &VoteRegistry) -> GetVotingOptionsResponse {
    GetVotingOptionsResponse {
        topic: registry.topic().to_string(),
        options: registry.list_options(),
    }
}

#[get("/health")]
pub async fn health() -> &'static str {
    debug!("Health check called");
    "OK"
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}

#[post("/GetVotingOptions", format = "json", data = "<_request>")]
pub async fn get_voting_options(
    registry: &State<VoteRegistry>,
    _request: Json<GetVotingOptionsRequest>,
) -> Json<GetVotingOptionsResponse> {
    info!("GetVotingOptions called");
    Json(voting_options(registry))
}

#[instrument(skip(registry, request), fields(option_id = %request.option_id))]
#[post("/Vote", format = "json", data = "<request>")]
pub async fn vote(
    registry: &State<VoteRegistry>,
    request: Json<VoteRequest>,
) -> Json<VoteResponse> {
    let recorded = registry.cast_vote(&request.option_id);
    if recorded {
        info!("Vote recorded");
    } else {
        info!("Vote rejected: unknown option");
    }
    Json(VoteResponse::from(recorded))
}

#[post("/GetResults", format = "json", data = "<_request>")]
pub async fn get_results(
    registry: &State<VoteRegistry>,
    _request: Json<GetResultsRequest>,
) -> Json<GetResultsResponse> {
    let response = GetResultsResponse {
        results: registry.list_results(),
    };
    info!(total_votes = response.total_votes(), "GetResults called");
    Json(response)
}

/// Reached only when a procedure call skipped the JSON routes above, i.e. it
/// did not declare `Content-Type: application/json`.
#[post("/<procedure>", rank = 2)]
pub async fn unsupported_encoding(procedure: &str) -> Status {
    if PROCEDURES.contains(&procedure) {
        debug!("Rejected {} call without a JSON content type", procedure);
        Status::UnsupportedMediaType
    } else {
        Status::NotFound
    }
}

/// Plain JSON fallback for clients without a Connect stack; takes no body.
#[post("/getVotingOptions")]
pub async fn direct_voting_options(registry: &State<VoteRegistry>) -> Json<GetVotingOptionsResponse> {
    info!("Direct API: GetVotingOptions called");
    Json(voting_options(registry))
}

#[get("/getVotingOptions")]
pub async fn direct_voting_options_get() -> Status {
    Status::MethodNotAllowed
}

#[put("/getVotingOptions")]
pub async fn direct_voting_options_put() -> Status {
    Status::MethodNotAllowed
}

#[delete("/getVotingOptions")]
pub async fn direct_voting_options_delete() -> Status {
    Status::MethodNotAllowed
}

#[patch("/getVotingOptions")]
pub async fn direct_voting_options_patch() -> Status {
    Status::MethodNotAllowed
}
