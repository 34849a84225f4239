//! User-facing texts
//!
//! The host pages are in Indonesian, so are the dialogs.

use crate::models::DeleteSubject;

pub const CONFIRM_DELETE: &str = "⚠️ Apakah Anda yakin ingin menghapus produk ini?\n\n\
     Tindakan ini TIDAK DAPAT DIBATALKAN!\n\n\
     Tekan OK untuk menghapus, atau Cancel untuk membatalkan.";

/// Shorter prompt used before the AJAX delete
pub const CONFIRM_AJAX_DELETE: &str = "Apakah Anda yakin ingin menghapus produk ini?";

pub const STATUS_DELETING: &str = "⏳ Sedang menghapus...";
pub const STATUS_DELETED: &str = "✓ Produk berhasil dihapus!";

pub const MODAL_TITLE: &str = "⚠️ Konfirmasi Penghapusan";
pub const MODAL_INTRO: &str = "Anda akan menghapus produk berikut:";
pub const MODAL_IRREVERSIBLE: &str = "Tindakan ini TIDAK DAPAT DIBATALKAN!";
pub const MODAL_CANCEL: &str = "Batal";
pub const MODAL_CONFIRM: &str = "Hapus Produk";

/// Message for the detailed confirm, label and id inserted as-is
pub fn confirm_with_details(subject: &DeleteSubject) -> String {
    format!(
        "⚠️ PERHATIAN!\n\n\
         Anda akan menghapus produk:\n\
         Nama: {}\n\
         ID: {}\n\n\
         Tindakan ini TIDAK DAPAT DIBATALKAN!\n\n\
         Lanjutkan?",
        subject.label, subject.id
    )
}

pub fn status_http_error(status_text: &str) -> String {
    format!("✗ Error: {}", status_text)
}

pub fn alert_transport_error(message: &str) -> String {
    format!("Terjadi error saat menghapus: {}", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_message_contains_label_and_id() {
        let cases = [
            DeleteSubject::new("Kertas A4", 1u32),
            DeleteSubject::new("", -5i64),
            DeleteSubject::new("Tinta <b>Hitam</b> & \"Biru\"", "SKU-09"),
            DeleteSubject::new("Line\nbreak", "{}"),
        ];
        for subject in &cases {
            let message = confirm_with_details(subject);
            assert!(message.contains(&format!("Nama: {}\n", subject.label)), "{}", message);
            assert!(message.contains(&format!("ID: {}\n", subject.id)), "{}", message);
        }
    }

    #[test]
    fn test_http_error_keeps_status_text() {
        assert_eq!(status_http_error("Not Found"), "✗ Error: Not Found");
    }
}
