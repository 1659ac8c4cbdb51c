use serde::Serialize;

/// Body of the `/healthcheck` endpoint.
#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}
