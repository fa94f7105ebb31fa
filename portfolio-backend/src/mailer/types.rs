/// Where an outgoing email is addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    /// The site owner's inbox (the authenticated sending account).
    Owner,
    /// An address supplied by a form submitter, passed through unvalidated.
    Address(String),
}

/// A rendered plain-text email ready for the transport.
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub to: Recipient,
    pub subject: String,
    pub body: String,
}

/// Borrowed view of one form submission, handed to the template renderers.
#[derive(Debug, Clone, Copy)]
pub struct SubmissionContext<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
}
