//! AJAX Delete Flow
//!
//! confirm → status element → DELETE request → success message and delayed
//! redirect, or an error message. Nothing is retried.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::DeleteConfig;
use crate::cookie::get_cookie;
use crate::error::DeleteError;
use crate::messages;
use crate::models::{DeleteReport, Outcome, SubjectId};
use crate::page::{Page, StatusIndicator, StatusTone};
use crate::transport::{DeleteRequest, DeleteTransport};

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// `{api_base}{id}/`
pub fn default_endpoint(api_base: &str, id: &SubjectId) -> String {
    let id = id.to_string();
    let base = api_base.trim_end_matches('/');
    format!("{}/{}/", base, utf8_percent_encode(&id, PATH_SEGMENT))
}

/// Run the whole flow. On success the pending redirect is returned so the
/// caller decides whether it may be cancelled.
pub async fn delete_with_ajax<P, T>(
    page: &P,
    transport: &T,
    config: &DeleteConfig,
    id: &SubjectId,
    endpoint: Option<&str>,
) -> Result<P::Timer, DeleteError>
where
    P: Page,
    T: DeleteTransport + ?Sized,
{
    let url = match endpoint.filter(|e| !e.is_empty()) {
        Some(endpoint) => endpoint.to_string(),
        None => default_endpoint(&config.api_base, id),
    };

    if !page.confirm(messages::CONFIRM_AJAX_DELETE) {
        log::info!("delete of {} cancelled", id);
        return Err(DeleteError::Cancelled);
    }

    let status = page.insert_status(StatusTone::Info, messages::STATUS_DELETING);

    let request = DeleteRequest::new(url)
        .header("X-CSRFToken", &get_cookie(&page.cookies(), &config.csrf_cookie))
        .header("Content-Type", "application/json");
    log::debug!("DELETE {}", request.url);

    match transport.delete(&request).await {
        Ok(reply) if reply.is_success() => {
            log::info!("deleted {} ({})", id, reply.status);
            status.update(StatusTone::Success, messages::STATUS_DELETED);
            let nav = page.clone();
            let target = config.redirect_url.clone();
            Ok(page.schedule(
                config.redirect_delay_ms,
                Box::new(move || nav.navigate(&target)),
            ))
        }
        Ok(reply) => {
            log::warn!("delete of {} rejected: {} {}", id, reply.status, reply.status_text);
            status.update(StatusTone::Danger, &messages::status_http_error(&reply.status_text));
            Err(DeleteError::Http {
                status: reply.status,
                status_text: reply.status_text,
            })
        }
        Err(e) => {
            log::error!("delete of {} failed: {}", id, e);
            status.update(StatusTone::Danger, &messages::status_http_error(&e.0));
            page.alert(&messages::alert_transport_error(&e.0));
            Err(DeleteError::Transport(e.0))
        }
    }
}

impl<T> From<&Result<T, DeleteError>> for DeleteReport {
    fn from(result: &Result<T, DeleteError>) -> Self {
        match result {
            Ok(_) => DeleteReport {
                outcome: Outcome::Succeeded,
                status: None,
                message: None,
            },
            Err(DeleteError::Cancelled) => DeleteReport {
                outcome: Outcome::Cancelled,
                status: None,
                message: None,
            },
            Err(DeleteError::Http { status, status_text }) => DeleteReport {
                outcome: Outcome::HttpError,
                status: Some(*status),
                message: Some(status_text.clone()),
            },
            Err(DeleteError::Transport(message)) => DeleteReport {
                outcome: Outcome::TransportError,
                status: None,
                message: Some(message.clone()),
            },
        }
    }
}
