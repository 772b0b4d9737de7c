use crate::domain::ContactRequest;
use htmlescape::encode_minimal;

/// Subject and bodies of one outgoing email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// The lead notification sent to the site owner.
///
/// Submitted values are HTML-escaped in the HTML body and kept verbatim in the
/// plain-text one.
pub fn owner_notification(request: &ContactRequest) -> EmailContent {
    let name = encode_minimal(&request.name);
    let email = encode_minimal(&request.email);
    let subject = encode_minimal(&request.subject);
    let message = encode_minimal(&request.message);

    let html = format!(
        r#"<div style="font-family: monospace; background: #0a0a0a; color: #00ff00; padding: 20px; border: 1px solid #00ff00;">
    <h2 style="color: #00ff00; border-bottom: 1px solid #00ff00; padding-bottom: 10px;">New Contact Form Submission</h2>
    <p><strong style="color: #0ff;">From:</strong> {name}</p>
    <p><strong style="color: #0ff;">Email:</strong> {email}</p>
    <p><strong style="color: #0ff;">Subject:</strong> {subject}</p>
    <div style="margin-top: 20px; padding: 15px; background: #111; border-left: 3px solid #00ff00;">
        <p><strong style="color: #0ff;">Message:</strong></p>
        <p style="white-space: pre-wrap;">{message}</p>
    </div>
</div>"#
    );
    let text = format!(
        "New Contact Form Submission\n\n\
        From: {}\n\
        Email: {}\n\
        Subject: {}\n\n\
        Message:\n{}\n",
        request.name, request.email, request.subject, request.message
    );
    EmailContent {
        subject: format!(
            "[Portfolio Contact] {} - from {}",
            request.subject, request.name
        ),
        html,
        text,
    }
}

/// The acknowledgement sent back to the visitor.
pub fn confirmation(request: &ContactRequest, signature: &str) -> EmailContent {
    let name = encode_minimal(&request.name);
    let subject = encode_minimal(&request.subject);

    let html = format!(
        r#"<div style="font-family: monospace; background: #0a0a0a; color: #e0e0e0; padding: 30px; max-width: 600px;">
    <div style="border: 1px solid #00ff00; padding: 20px;">
        <h1 style="color: #00ff00; margin: 0 0 20px 0;">// MESSAGE_RECEIVED</h1>
        <p>Hey {name},</p>
        <p>Thanks for reaching out! I've received your message regarding "<strong style="color: #0ff;">{subject}</strong>".</p>
        <p>I typically respond within <span style="color: #00ff00;">24 hours</span>. If your request is urgent, feel free to mention it in a follow-up.</p>
        <div style="margin-top: 30px; padding-top: 20px; border-top: 1px solid #333;">
            <p style="color: #666; font-size: 12px;">This is an automated confirmation. Please do not reply to this email.</p>
        </div>
    </div>
</div>"#
    );
    let text = format!(
        "Hey {},\n\n\
        Thanks for reaching out! I've received your message regarding \"{}\".\n\
        I typically respond within 24 hours. If your request is urgent, feel free to mention it in a follow-up.\n\n\
        This is an automated confirmation. Please do not reply to this email.\n",
        request.name, request.subject
    );
    EmailContent {
        subject: format!("Message Received - {}", signature),
        html,
        text,
    }
}
