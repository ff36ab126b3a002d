/// File name for a row strip. Rows are 0-based, file names 1-based.
pub fn row_filename(row: u32) -> String {
    format!("animation_row_{}.png", u64::from(row) + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_filename_is_one_indexed() {
        assert_eq!(row_filename(0), "animation_row_1.png");
        assert_eq!(row_filename(19), "animation_row_20.png");
    }
}
