use rocket::{Request, catch, serde::json::Json};
use shared::error::{Error, ErrorCode};
use tracing::warn;

#[catch(400)]
pub fn bad_request(req: &Request) -> Json<Error> {
    warn!("Rejected malformed request to {}", req.uri());
    Json(Error::new(ErrorCode::InvalidArgument, "Request body is not valid JSON."))
}

#[catch(404)]
pub fn not_found(req: &Request) -> Json<Error> {
    let error = match req.uri().path().segments().next() {
        Some("voting.VotingService") => Error::with_details(
            ErrorCode::Unimplemented,
            "Unknown procedure.",
            req.uri().path().to_string(),
        ),
        _ => Error::new(ErrorCode::NotFound, "The requested resource was not found."),
    };
    Json(error)
}

#[catch(405)]
pub fn method_not_allowed(_req: &Request) -> Json<Error> {
    Json(Error::new(ErrorCode::InvalidArgument, "Method not allowed."))
}

#[catch(415)]
pub fn unsupported_media_type(_req: &Request) -> Json<Error> {
    Json(Error::new(ErrorCode::InvalidArgument, "Content-Type must be application/json."))
}

#[catch(422)]
pub fn unprocessable_entity(_req: &Request) -> Json<Error> {
    Json(Error::new(ErrorCode::InvalidArgument, "Request fields have the wrong type."))
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> Json<Error> {
    Json(Error::new(ErrorCode::Internal, "An internal server error occurred."))
}
