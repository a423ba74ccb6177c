use bittutor_protocol::{LoginPayload, RegistrationPayload};

use super::{fields, FormState, SelectedFile};

/// A registration payload whose image has not been read yet
#[derive(Debug, Clone)]
pub struct RegistrationDraft {
    pub payload: RegistrationPayload,
    pub file: Option<SelectedFile>,
}

fn field<F: FormState + ?Sized>(form: &F, name: &str) -> String {
    form.value(name).unwrap_or_default().to_string()
}

/// Read the registration fields. The image stays unset until
/// [`attach_file_if_present`](super::attach_file_if_present) runs.
pub fn collect_registration<F: FormState + ?Sized>(form: &F) -> RegistrationDraft {
    let payload = RegistrationPayload::new(
        field(form, fields::FULL_NAME),
        field(form, fields::EMAIL),
        field(form, fields::PASSWORD),
        field(form, fields::STUDIES),
        field(form, fields::AGE),
        field(form, fields::RESUME),
    );

    RegistrationDraft {
        payload,
        file: form.selected_file(fields::IMAGE).cloned(),
    }
}

pub fn collect_login<F: FormState + ?Sized>(form: &F) -> LoginPayload {
    LoginPayload::new(field(form, fields::EMAIL), field(form, fields::PASSWORD))
}
