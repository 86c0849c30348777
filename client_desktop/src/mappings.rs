//! Controller mapping database (SDL `gamecontrollerdb.txt` format)
//!
//! Each mapping line is `GUID,name,key:value,...`. Blank lines and `#`
//! comments are allowed. The file is checked up front so a malformed
//! database fails startup instead of silently dropping controllers.

use std::fs;
use std::path::Path;

use snafu::ResultExt;

use crate::error::{MappingReadSnafu, StartupError};

const GUID_LEN: usize = 32;

/// Validated mapping text, ready to hand to the controller subsystem
#[derive(Debug, Clone)]
pub struct MappingDb {
    text: String,
    count: usize,
}

impl MappingDb {
    /// Read and validate the mapping file at `path`
    pub fn load(path: &Path) -> Result<Self, StartupError> {
        let text = fs::read_to_string(path).context(MappingReadSnafu { path })?;
        Self::parse(&text).map_err(|(line, reason)| StartupError::MappingParse {
            path: path.to_path_buf(),
            line,
            reason,
        })
    }

    /// Validate mapping text; on failure returns the 1-based line and reason
    pub fn parse(text: &str) -> Result<Self, (usize, String)> {
        let mut count = 0;
        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            validate_line(line).map_err(|reason| (idx + 1, reason))?;
            count += 1;
        }

        if count == 0 {
            return Err((0, "no controller mappings found".to_string()));
        }

        Ok(Self {
            text: text.to_string(),
            count,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of mapping lines
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

fn validate_line(line: &str) -> Result<(), String> {
    let mut fields = line.split(',');

    let guid = fields.next().unwrap_or_default();
    if guid.len() != GUID_LEN || !guid.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("invalid controller GUID {:?}", guid));
    }

    match fields.next() {
        Some(name) if !name.trim().is_empty() => {}
        _ => return Err("missing controller name".to_string()),
    }

    let mut bindings = 0;
    for field in fields.filter(|f| !f.is_empty()) {
        match field.split_once(':') {
            Some((key, value)) if !key.is_empty() && !value.is_empty() => bindings += 1,
            _ => return Err(format!("invalid binding {:?}", field)),
        }
    }

    if bindings == 0 {
        return Err("mapping has no bindings".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const XBOX: &str = "030000005e0400008e02000010010000,Xbox 360 Controller,a:b0,b:b1,leftx:a0,lefty:a1,platform:Linux,";

    #[test]
    fn test_parse_valid_database() {
        let text = format!("# Game Controller DB\n\n{}\n{}\n", XBOX, XBOX);
        let db = MappingDb::parse(&text).unwrap();
        assert_eq!(db.len(), 2);
        assert!(!db.is_empty());
        assert_eq!(db.text(), text);
    }

    #[test]
    fn test_bad_guid_reports_line() {
        let text = format!("{}\nnot-a-guid,Pad,a:b0\n", XBOX);
        let (line, reason) = MappingDb::parse(&text).unwrap_err();
        assert_eq!(line, 2);
        assert!(reason.contains("GUID"), "{}", reason);
    }

    #[test]
    fn test_missing_name() {
        let (line, reason) =
            MappingDb::parse("030000005e0400008e02000010010000,,a:b0").unwrap_err();
        assert_eq!(line, 1);
        assert_eq!(reason, "missing controller name");
    }

    #[test]
    fn test_binding_without_colon() {
        let (_, reason) =
            MappingDb::parse("030000005e0400008e02000010010000,Pad,a:b0,broken").unwrap_err();
        assert!(reason.contains("broken"));
    }

    #[test]
    fn test_mapping_without_bindings() {
        let (_, reason) = MappingDb::parse("030000005e0400008e02000010010000,Pad,").unwrap_err();
        assert_eq!(reason, "mapping has no bindings");
    }

    #[test]
    fn test_empty_database_is_malformed() {
        let (line, _) = MappingDb::parse("# only comments\n\n").unwrap_err();
        assert_eq!(line, 0);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let path = Path::new("definitely/not/here/gamecontrollerdb.txt");
        let err = MappingDb::load(path).unwrap_err();
        assert!(matches!(err, StartupError::MappingRead { .. }));
    }
}
