//! Email address format check for the contact form.
//!
//! Mirrors the classic `local@domain.tld` shape test: exactly one `@`, a
//! non-empty local part, and a domain containing at least one `.` with
//! characters on both sides. No whitespace anywhere. This is a plausibility
//! gate for user feedback, not RFC 5322 validation.

/// Returns true if `email` looks like a deliverable address.
pub fn is_valid_email(email: &str) -> bool {
    let mut local_len = 0usize;
    let mut domain_len = 0usize;
    let mut dot_in_domain = false;
    let mut after_last_dot = 0usize;
    let mut seen_at = false;

    for ch in email.chars() {
        if ch.is_whitespace() {
            return false;
        }
        match ch {
            '@' => {
                if seen_at {
                    // Second @ is never valid
                    return false;
                }
                seen_at = true;
            }
            '.' if seen_at => {
                if domain_len == 0 {
                    // Domain may not start with a dot
                    return false;
                }
                dot_in_domain = true;
                after_last_dot = 0;
                domain_len += 1;
            }
            _ => {
                if seen_at {
                    domain_len += 1;
                    after_last_dot += 1;
                } else {
                    local_len += 1;
                }
            }
        }
    }

    seen_at && local_len > 0 && dot_in_domain && after_last_dot > 0
}
