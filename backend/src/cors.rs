use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Request, Response};
use rocket::http::Header;
use crate::config::CorsPolicy;

pub const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type, Authorization, Connect-Protocol-Version";

pub struct CORS {
    policy: CorsPolicy,
}

impl CORS {
    pub fn new(policy: CorsPolicy) -> Self {
        Self { policy }
    }
}

#[rocket::async_trait]
impl Fairing for CORS {
    fn info(&self) -> Info {
        Info {
            name: "CORS",
            kind: Kind::Response
        }
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        let origin = req.headers().get_one("Origin");

        if let Some(allow_origin) = self.policy.allowed_origins.header_value(origin) {
            res.set_header(Header::new("Access-Control-Allow-Origin", allow_origin));
            res.set_header(Header::new("Access-Control-Allow-Methods", ALLOWED_METHODS));
            res.set_header(Header::new("Access-Control-Allow-Headers", ALLOWED_HEADERS));
            res.set_header(Header::new("Access-Control-Max-Age", self.policy.max_age_secs.to_string()));
        }
        if self.policy.allowed_origins.varies_by_origin() {
            res.set_header(Header::new("Vary", "Origin"));
        }
    }
}
