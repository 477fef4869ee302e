use crate::error::Result;

/// Raw HTTP reply: status code plus undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub const fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Sends one JSON POST and waits for the reply.
///
/// Implementations fail only when no reply was received; any status code is
/// a successful transport result.
pub trait Transport {
    fn post_json(&self, url: &str, body: Vec<u8>) -> Result<HttpReply>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post_json(&self, url: &str, body: Vec<u8>) -> Result<HttpReply> {
        (**self).post_json(url, body)
    }
}
