use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        AssetGenError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(AssetGenError::font("x").to_string().contains("font error:"));
    assert!(
        AssetGenError::render("x")
            .to_string()
            .contains("render error:")
    );
}

#[test]
fn io_error_names_the_path() {
    let err = AssetGenError::io(
        "assets/images/xlarge.png",
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    );
    let msg = err.to_string();
    assert!(msg.contains("assets/images/xlarge.png"));
    assert!(msg.contains("denied"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn image_errors_convert_with_question_mark() {
    fn decode() -> AssetGenResult<()> {
        image::load_from_memory(b"not a png")?;
        Ok(())
    }
    assert!(matches!(decode(), Err(AssetGenError::Image(_))));
}
