/// How an artifact's payload is encoded inside its data URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadEncoding {
    Base64,
    Utf8,
}

/// A downloadable rendering of some part of a result. Derived on every render
/// pass, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub suggested_file_name: String,
    pub mime_type: String,
    pub encoding: PayloadEncoding,
    pub payload: String,
}

impl DownloadArtifact {
    pub fn build(
        file_name_base: &str,
        extension: &str,
        mime_type: &str,
        encoding: PayloadEncoding,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            suggested_file_name: format!("{file_name_base}.{extension}"),
            mime_type: mime_type.to_string(),
            encoding,
            payload: payload.into(),
        }
    }

    /// The `data:` URI a download link should point at.
    pub fn data_uri(&self) -> String {
        match self.encoding {
            PayloadEncoding::Base64 => format!("data:{};base64,{}", self.mime_type, self.payload),
            PayloadEncoding::Utf8 => format!(
                "data:{};charset=utf-8,{}",
                self.mime_type,
                urlencoding::encode(&self.payload)
            ),
        }
    }
}

/// File name base for a result's artifacts, derived from the target address:
/// the authority part (between `://` and the next `/`, or the whole address when
/// there is no scheme separator), lowercased, with every run of characters outside
/// `[a-z0-9.]` collapsed into one underscore.
pub fn page_file_base(address: &str) -> String {
    let authority = match address.split_once("://") {
        Some((_, rest)) => rest.split('/').next().unwrap_or(rest),
        None => address,
    };

    let mut base = String::with_capacity(authority.len());
    let mut prev_underscore = false;
    for c in authority.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' {
            base.push(c);
            prev_underscore = false;
        } else if !prev_underscore {
            base.push('_');
            prev_underscore = true;
        }
    }
    base
}
