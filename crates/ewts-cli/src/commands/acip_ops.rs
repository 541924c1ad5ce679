use ewts_engine::acip::{acip_to_unicode, unicode_to_acip};

/// Convert ACIP to Tibetan Unicode, or back with `from_unicode`.
pub fn acip_cmd(text: &str, from_unicode: bool) {
    if from_unicode {
        println!("{}", unicode_to_acip(text));
    } else {
        println!("{}", acip_to_unicode(text));
    }
}
