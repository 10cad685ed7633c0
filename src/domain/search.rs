use super::contact::Contact;

/// Name matches case-insensitively, phone matches the literal text.
/// An empty filter matches every contact.
pub fn matches_filter(contact: &Contact, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }

    contact
        .name
        .to_lowercase()
        .contains(filter.to_lowercase().as_str())
        || contact.phone.contains(filter)
}

pub fn filter_contacts<'a, 'f, I>(contacts: I, filter: &'f str) -> impl Iterator<Item = &'a Contact>
where
    I: IntoIterator<Item = &'a Contact>,
{
    contacts
        .into_iter()
        .filter(move |contact| matches_filter(contact, filter))
}
