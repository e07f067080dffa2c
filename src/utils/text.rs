/// Upper-case the first character and leave the rest untouched
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `john.doe@school.edu` -> `John Doe`
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();

    local
        .split('.')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}
