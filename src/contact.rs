use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("required field is empty: {0}")]
    MissingField(Field),
    #[error("couldn't deliver message: {0}")]
    Delivery(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Same rule as the `required` attributes on the form inputs: any
    /// non-empty value passes, whitespace included.
    pub fn validate(&self) -> Result<(), ContactError> {
        for field in [Field::Name, Field::Email] {
            if self.get(field).is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub message: String,
}

/// Receives submitted contact requests. Where they go (email, ticketing,
/// nowhere) is up to the deployment.
pub trait ContactSink {
    fn deliver(&self, form: &ContactForm) -> Result<Acknowledgement, ContactError>;
}

/// Logs the submission and thanks the sender. Nothing leaves the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ContactSink for LogSink {
    fn deliver(&self, form: &ContactForm) -> Result<Acknowledgement, ContactError> {
        let payload =
            serde_json::to_string(form).map_err(|e| ContactError::Delivery(e.to_string()))?;
        log::info!("Form submitted: {payload}");
        Ok(Acknowledgement {
            message: format!("Thanks {}! I'll get back to you soon.", form.name),
        })
    }
}

/// Modal visibility plus the form behind it. One instance is shared by every
/// trigger on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFlow {
    open: bool,
    form: ContactForm,
}

impl ContactFlow {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Opening never clears a half filled form.
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.form = ContactForm::default();
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.form.set(field, value);
    }

    /// Validates, hands the form to `sink`, then closes and resets. On any
    /// error the flow is left exactly as it was.
    pub fn submit<S: ContactSink>(&mut self, sink: &S) -> Result<Acknowledgement, ContactError> {
        self.form.validate()?;
        let ack = sink.deliver(&self.form)?;
        self.close();
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        received: RefCell<Vec<ContactForm>>,
    }

    impl ContactSink for RecordingSink {
        fn deliver(&self, form: &ContactForm) -> Result<Acknowledgement, ContactError> {
            self.received.borrow_mut().push(form.clone());
            LogSink.deliver(form)
        }
    }

    struct FailingSink;

    impl ContactSink for FailingSink {
        fn deliver(&self, _form: &ContactForm) -> Result<Acknowledgement, ContactError> {
            Err(ContactError::Delivery("mail relay offline".to_string()))
        }
    }

    fn filled(name: &str, email: &str, message: &str) -> ContactFlow {
        let mut flow = ContactFlow::default();
        flow.open();
        flow.set_field(Field::Name, name.to_string());
        flow.set_field(Field::Email, email.to_string());
        flow.set_field(Field::Message, message.to_string());
        flow
    }

    #[test]
    fn test_starts_closed_and_empty() {
        let flow = ContactFlow::default();
        assert!(!flow.is_open());
        assert_eq!(flow.form(), &ContactForm::default());
    }

    #[test]
    fn test_reopen_keeps_form() {
        let mut flow = filled("Ada", "", "");
        let before = flow.clone();
        flow.open();
        flow.open();
        assert_eq!(flow, before);
        assert_eq!(flow.form().name, "Ada");
    }

    #[test]
    fn test_submit_closes_and_resets() {
        let sink = RecordingSink::default();
        let mut flow = filled("Ada", "ada@example.com", "");

        let ack = flow.submit(&sink).expect("valid form should submit");
        assert_eq!(ack.message, "Thanks Ada! I'll get back to you soon.");
        assert!(!flow.is_open());
        assert_eq!(
            flow.form(),
            &ContactForm {
                name: String::new(),
                email: String::new(),
                message: String::new(),
            }
        );

        let received = sink.received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].email, "ada@example.com");
    }

    #[test]
    fn test_empty_name_blocks_submit() {
        let sink = RecordingSink::default();
        let mut flow = filled("", "ada@example.com", "hello");
        let before = flow.clone();

        let res = flow.submit(&sink);
        assert_eq!(res, Err(ContactError::MissingField(Field::Name)));
        assert_eq!(flow, before);
        assert!(flow.is_open());
        assert!(sink.received.borrow().is_empty());

        let mut no_email = filled("Ada", "", "");
        assert_eq!(
            no_email.submit(&sink),
            Err(ContactError::MissingField(Field::Email))
        );
    }

    #[test]
    fn test_whitespace_name_passes_like_required() {
        let sink = RecordingSink::default();
        let mut flow = filled("   ", "ada@example.com", "");

        let ack = flow.submit(&sink).expect("required accepts whitespace");
        assert_eq!(ack.message, "Thanks    ! I'll get back to you soon.");
        assert!(!flow.is_open());
        assert_eq!(flow.form(), &ContactForm::default());
        assert_eq!(sink.received.borrow()[0].name, "   ");
    }

    #[test]
    fn test_delivery_failure_keeps_modal_open() {
        let mut flow = filled("Ada", "ada@example.com", "hi");
        let before = flow.clone();
        let res = flow.submit(&FailingSink);
        assert!(matches!(res, Err(ContactError::Delivery(_))));
        assert_eq!(flow, before);
    }

    #[test]
    fn test_close_discards_form() {
        let mut flow = filled("Ada", "ada@example.com", "hi");
        flow.close();
        assert!(!flow.is_open());
        assert_eq!(flow.form(), &ContactForm::default());
        assert_eq!(
            ContactError::MissingField(Field::Email).to_string(),
            "required field is empty: email"
        );
    }
}
