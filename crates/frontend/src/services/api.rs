use gloo_net::http::Request;
use shared_types::{Delivery, EntryEndpoint, EntryError, EntryRecord, EntryResult, ReferenceLists};
use web_sys::{RequestMode, ResponseType};

use crate::config::{FormConfig, WriteMode};

/// Remote spreadsheet script reached over `fetch`
#[derive(Debug, Clone, PartialEq)]
pub struct SheetEndpoint {
    url: String,
    write_mode: WriteMode,
}

impl SheetEndpoint {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            url: config.endpoint_url.clone(),
            write_mode: config.write_mode,
        }
    }
}

impl EntryEndpoint for SheetEndpoint {
    async fn fetch_reference_lists(&self) -> EntryResult<ReferenceLists> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(EntryError::transport)?;

        if !response.ok() {
            return Err(EntryError::Http(response.status()));
        }

        response.json().await.map_err(EntryError::decode)
    }

    async fn submit_entry(&self, record: &EntryRecord) -> EntryResult<Delivery> {
        let mode = match self.write_mode {
            WriteMode::NoCors => RequestMode::NoCors,
            WriteMode::Cors => RequestMode::Cors,
        };

        let response = Request::post(&self.url)
            .mode(mode)
            .header("Content-Type", "application/json")
            .body(record.to_json()?)
            .map_err(|e| EntryError::Encode(format!("{:?}", e)))?
            .send()
            .await
            .map_err(EntryError::transport)?;

        classify_write(
            self.write_mode,
            response.type_(),
            response.ok(),
            response.status(),
        )
    }
}

/// Map what a write response lets us see onto a [`Delivery`].
///
/// Only a `no-cors` request that really came back opaque is unconfirmed; a
/// readable response is judged by its status in either mode.
fn classify_write(
    write_mode: WriteMode,
    response_type: ResponseType,
    ok: bool,
    status: u16,
) -> EntryResult<Delivery> {
    match (write_mode, response_type) {
        // Opaque responses report status 0 and no body; nothing more to learn.
        (WriteMode::NoCors, ResponseType::Opaque) => Ok(Delivery::Opaque),
        _ if ok => Ok(Delivery::Acknowledged),
        _ => Err(EntryError::Http(status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_cors_opaque_response_is_unconfirmed() {
        assert_eq!(
            classify_write(WriteMode::NoCors, ResponseType::Opaque, false, 0),
            Ok(Delivery::Opaque)
        );
    }

    #[test]
    fn test_no_cors_readable_response_uses_status() {
        assert_eq!(
            classify_write(WriteMode::NoCors, ResponseType::Basic, true, 200),
            Ok(Delivery::Acknowledged)
        );
        assert_eq!(
            classify_write(WriteMode::NoCors, ResponseType::Basic, false, 500),
            Err(EntryError::Http(500))
        );
    }

    #[test]
    fn test_cors_response_uses_status() {
        assert_eq!(
            classify_write(WriteMode::Cors, ResponseType::Cors, true, 200),
            Ok(Delivery::Acknowledged)
        );
        assert_eq!(
            classify_write(WriteMode::Cors, ResponseType::Cors, false, 403),
            Err(EntryError::Http(403))
        );
    }

    #[test]
    fn test_error_response_is_not_opaque() {
        assert_eq!(
            classify_write(WriteMode::NoCors, ResponseType::Error, false, 0),
            Err(EntryError::Http(0))
        );
    }
}
