use std::cell::RefCell;

use super::{FetchError, FileDownloader, Response};

/// Hands out scripted responses in order and records every requested URL.
pub struct MockFetcher {
    responses: RefCell<Vec<Result<Response, FetchError>>>,
    requests: RefCell<Vec<String>>,
}

impl FileDownloader for MockFetcher {
    fn fetch(&self, url: &str) -> Result<Response, FetchError> {
        self.requests.borrow_mut().push(url.to_string());

        let mut responses = self.responses.borrow_mut();

        if responses.is_empty() {
            Err(FetchError::Transport(format!("no scripted response for {url}")))
        } else {
            responses.remove(0)
        }
    }
}

impl MockFetcher {
    pub fn new(responses: Vec<Result<Response, FetchError>>) -> Self {
        Self {
            responses: RefCell::new(responses),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}
