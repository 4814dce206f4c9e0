//! The fixed catalog of languages the service accepts.

/// Every language the backend supports, in presentation order.
/// Fixed at compile time; `/languages` returns it verbatim.
pub const SUPPORTED_LANGUAGES: [&str; 25] = [
    "English", "Urdu", "Hindi", "Arabic", "French", "Spanish",
    "German", "Italian", "Portuguese", "Russian", "Chinese",
    "Japanese", "Korean", "Turkish", "Indonesian", "Bengali",
    "Punjabi", "Persian", "Vietnamese", "Thai", "Malay",
    "Dutch", "Swedish", "Polish", "Greek",
];

/// Case-sensitive exact-match membership test.
pub fn is_supported(language: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&language)
}
