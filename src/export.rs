use base64::Engine;
use bytes::Bytes;

use crate::models::GeneratedComponent;

pub const DOWNLOAD_MIME: &str = "text/plain";

/// A generated component packaged for a browser-level save.
#[derive(Debug, Clone, PartialEq)]
pub struct Download {
    pub file_name: String,
    pub mime: &'static str,
    pub contents: Bytes,
}

impl Download {
    /// `data:` URL a page can hand to an anchor's `href`.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, base64::engine::general_purpose::STANDARD.encode(&self.contents))
    }
}

pub fn build_download(component: &GeneratedComponent) -> Download {
    Download {
        file_name: format!("Component.{}", component.framework.extension()),
        mime: DOWNLOAD_MIME,
        contents: Bytes::from(component.code.clone()),
    }
}
