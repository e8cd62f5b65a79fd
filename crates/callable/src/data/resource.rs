use std::fmt;

use url::Url;

use super::request::Request;

/// Either a bare location or a full request descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
    Location(Url),
    Request(Request),
}

impl Resource {
    pub fn url(&self) -> Option<&Url> {
        match self {
            Resource::Location(url) => Some(url),
            Resource::Request(request) => request.url(),
        }
    }

    pub fn absolute_string(&self) -> &str {
        match self {
            Resource::Location(url) => url.as_str(),
            Resource::Request(request) => request.absolute_string(),
        }
    }

    /// The request a transport should issue for this resource.
    pub fn to_request(&self) -> Request {
        match self {
            Resource::Location(url) => Request::new(url.clone()),
            Resource::Request(request) => request.clone(),
        }
    }
}

impl From<Url> for Resource {
    fn from(url: Url) -> Self { Resource::Location(url) }
}

impl From<Request> for Resource {
    fn from(request: Request) -> Self { Resource::Request(request) }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.absolute_string()) }
}
