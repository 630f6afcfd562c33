use axum::{
    Form, Json,
    extract::{FromRequest, Request, State},
    http::{StatusCode, header},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::contact::{CONTACT_FIELDS, ContactRequest};
use crate::presentation::AppState;
use crate::presentation::app_error::{AppError, AppResult, ErrorBody};

/// Absent and `null` fields deserialize as empty so they are reported as
/// missing instead of failing extraction.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub(crate) struct ContactDto {
    #[validate(length(max = 200))]
    pub(crate) name: Option<String>,
    #[validate(length(max = 254))]
    pub(crate) email: Option<String>,
    #[validate(length(max = 5000))]
    pub(crate) message: Option<String>,
}

impl ContactDto {
    /// Length limits apply to the trimmed value; a blank field is missing,
    /// not too long.
    fn trimmed(self) -> Self {
        let trim = |value: Option<String>| value.map(|v| v.trim().to_string());
        Self {
            name: trim(self.name),
            email: trim(self.email),
            message: trim(self.message),
        }
    }
}

impl From<ContactDto> for ContactRequest {
    fn from(dto: ContactDto) -> Self {
        Self {
            name: dto.name.unwrap_or_default(),
            email: dto.email.unwrap_or_default(),
            message: dto.message.unwrap_or_default(),
        }
    }
}

/// Contact body sent either as JSON or as an urlencoded form post.
pub(crate) struct ContactPayload(pub(crate) ContactDto);

impl<S> FromRequest<S> for ContactPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(dto) = Form::<ContactDto>::from_request(req, state).await?;
            return Ok(Self(dto));
        }

        let Json(dto) = Json::<ContactDto>::from_request(req, state).await?;
        Ok(Self(dto))
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ContactFormDto {
    pub(crate) required_fields: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ContactResponseDto {
    pub(crate) success: bool,
}

#[utoipa::path(
    get,
    path = "/contact/",
    tag = "contact",
    responses(
        (status = 200, description = "Contact form description", body = ContactFormDto)
    )
)]
pub(crate) async fn contact_form() -> (StatusCode, Json<ContactFormDto>) {
    let required_fields = CONTACT_FIELDS.iter().map(|f| f.to_string()).collect();

    (StatusCode::OK, Json(ContactFormDto { required_fields }))
}

#[utoipa::path(
    post,
    path = "/contact/",
    tag = "contact",
    request_body = ContactDto,
    responses(
        (status = 200, description = "Message relayed", body = ContactResponseDto),
        (status = 400, description = "Missing, too long or malformed fields", body = ErrorBody),
        (status = 415, description = "Body is neither JSON nor an urlencoded form", body = ErrorBody),
        (status = 502, description = "Mail transport rejected the message", body = ErrorBody)
    )
)]
pub(crate) async fn submit_contact(
    State(state): State<AppState>,
    ContactPayload(dto): ContactPayload,
) -> AppResult<(StatusCode, Json<ContactResponseDto>)> {
    let dto = dto.trimmed();
    dto.validate()?;

    state.contact_service.submit(dto.into()).await?;
    Ok((StatusCode::OK, Json(ContactResponseDto { success: true })))
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::ContactDto;
    use crate::domain::contact::ContactRequest;

    #[test]
    fn blank_fields_trim_to_empty_before_length_check() {
        let dto = ContactDto {
            name: Some(" ".repeat(300)),
            email: None,
            message: Some("hi".to_string()),
        }
        .trimmed();

        assert!(dto.validate().is_ok());
        let req = ContactRequest::from(dto);
        assert_eq!(req.name, "");
        assert_eq!(req.email, "");
    }

    #[test]
    fn null_fields_deserialize_as_missing() {
        let dto: ContactDto =
            serde_json::from_str(r#"{"name": null, "message": "hi"}"#).expect("must decode");
        assert!(dto.name.is_none());
        assert!(dto.email.is_none());
        assert_eq!(dto.message.as_deref(), Some("hi"));
    }
}
