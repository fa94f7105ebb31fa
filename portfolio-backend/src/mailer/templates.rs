//! Plain-text bodies for the two notification emails
//!
//! Rendering is plain `format!` over a submission; there is no templating
//! engine. Each function returns a complete `OutgoingEmail` so callers and
//! tests never assemble subjects or recipients themselves.

use super::types::{OutgoingEmail, Recipient, SubmissionContext};

pub const OWNER_SUBJECT: &str = "New Portfolio Message";
pub const AUTO_REPLY_SUBJECT: &str = "Thank you for contacting me";

// Social links included in both emails
const LINKEDIN_URL: &str = "https://linkedin.com/in/alex-carter-dev/";
const INSTAGRAM_URL: &str = "https://www.instagram.com/alexcarter.codes/";
const X_URL: &str = "https://x.com/alexcarterdev";

const SIGNATURE: &str = "Alex";

/// Alert delivered to the site owner's own inbox for every submission.
pub fn owner_notification(submission: &SubmissionContext) -> OutgoingEmail {
    let body = format!(
        "New Contact Form Submission\n\
         \n\
         Name: {}\n\
         Email: {}\n\
         Message: {}\n\
         \n\
         -----------------------------------\n\
         LinkedIn: {}\n\
         Instagram: {}\n\
         X: {}\n",
        submission.name, submission.email, submission.message, LINKEDIN_URL, INSTAGRAM_URL, X_URL
    );

    OutgoingEmail {
        to: Recipient::Owner,
        subject: OWNER_SUBJECT.to_string(),
        body,
    }
}

/// Acknowledgement sent back to the address the submitter supplied.
pub fn auto_reply(submission: &SubmissionContext) -> OutgoingEmail {
    let body = format!(
        "Hi {},\n\
         \n\
         Thank you for reaching out! I have received your message.\n\
         \n\
         I will get back to you soon.\n\
         \n\
         Meanwhile, feel free to connect with me:\n\
         \n\
         LinkedIn: {}\n\
         Instagram: {}\n\
         X: {}\n\
         \n\
         Best regards,\n\
         {}\n",
        submission.name, LINKEDIN_URL, INSTAGRAM_URL, X_URL, SIGNATURE
    );

    OutgoingEmail {
        to: Recipient::Address(submission.email.to_string()),
        subject: AUTO_REPLY_SUBJECT.to_string(),
        body,
    }
}
