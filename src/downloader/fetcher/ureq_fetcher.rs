use std::io::Read;
use std::time::Duration;

use tracing::debug;
use ureq::Error::{Status, Transport};

use super::{FetchError, FileDownloader, Response};

pub struct UReqFetcher {
    agent: ureq::Agent,
}

impl FileDownloader for UReqFetcher {
    fn fetch(&self, url: &str) -> Result<Response, FetchError> {
        let response = match self.agent.get(url).call() {
            Ok(response) => response,

            // Error statuses still carry headers; the caller decides what to do.
            Err(Status(_, response)) => response,

            Err(Transport(transport)) => return Err(FetchError::Transport(transport.to_string())),
        };

        let status = response.status();

        let headers = response
            .headers_names()
            .into_iter()
            .filter_map(|name| {
                let value = response.header(&name)?.to_string();
                Some((name.to_ascii_lowercase(), value))
            })
            .collect();

        let mut body = Vec::new();
        response.into_reader().read_to_end(&mut body)?;

        debug!(url, status, bytes = body.len(), "response received");

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

impl UReqFetcher {
    /// `timeout` bounds connecting and each read separately, so a slow body
    /// that keeps arriving is not cut off.
    pub fn with_timeout(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .build();

        UReqFetcher { agent }
    }
}
