//! Format enumerations shared across the provider surface.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Output section requested from a recognition call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Mathpix Markdown text.
    Text,
    /// HTML rendered from text via mathpix-markdown-it.
    Html,
    /// Data computed from text per the `data_options` request parameter.
    Data,
    /// Styled LaTeX; returned only when the whole image reduces to a single
    /// equation.
    LatexStyled,
}

impl ResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Html => "html",
            Self::Data => "data",
            Self::LatexStyled => "latex_styled",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Image file format accepted by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
    Bmp,
    /// JPEG 2000 (`.jp2`).
    #[serde(rename = "jp2")]
    Jpeg2000,
    Webp,
    /// Portable anymap family (`.pbm`, `.pgm`, `.ppm`, `.pxm`, `.pnm`).
    Pnm,
    Pfm,
    /// Sun raster (`.sr`, `.ras`).
    Sunraster,
    Tiff,
    /// OpenEXR (`.exr`).
    #[serde(rename = "exr")]
    OpenExr,
    /// Radiance HDR (`.hdr`, `.pic`).
    Hdr,
    /// Raster and vector geospatial data supported by GDAL.
    Gdal,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Bmp => "bmp",
            Self::Jpeg2000 => "jp2",
            Self::Webp => "webp",
            Self::Pnm => "pnm",
            Self::Pfm => "pfm",
            Self::Sunraster => "sunraster",
            Self::Tiff => "tiff",
            Self::OpenExr => "exr",
            Self::Hdr => "hdr",
            Self::Gdal => "gdal",
        }
    }

    /// File extensions associated with this format. GDAL covers many formats
    /// and returns none.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Jpeg => &[".jpeg", ".jpg", ".jpe"],
            Self::Png => &[".png"],
            Self::Bmp => &[".bmp", ".dib"],
            Self::Jpeg2000 => &[".jp2"],
            Self::Webp => &[".webp"],
            Self::Pnm => &[".pbm", ".pgm", ".ppm", ".pxm", ".pnm"],
            Self::Pfm => &[".pfm"],
            Self::Sunraster => &[".sr", ".ras"],
            Self::Tiff => &[".tiff", ".tif"],
            Self::OpenExr => &[".exr"],
            Self::Hdr => &[".hdr", ".pic"],
            Self::Gdal => &[],
        }
    }

    /// Whether `ext` (with leading dot) belongs to this format.
    pub fn matches_extension(&self, ext: &str) -> bool {
        self.extensions().contains(&ext)
    }

    /// Looks up the format for a file extension (with leading dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        const ALL: [ImageFormat; 12] = [
            ImageFormat::Jpeg,
            ImageFormat::Png,
            ImageFormat::Bmp,
            ImageFormat::Jpeg2000,
            ImageFormat::Webp,
            ImageFormat::Pnm,
            ImageFormat::Pfm,
            ImageFormat::Sunraster,
            ImageFormat::Tiff,
            ImageFormat::OpenExr,
            ImageFormat::Hdr,
            ImageFormat::Gdal,
        ];
        ALL.into_iter().find(|f| f.matches_extension(ext))
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Document input format accepted by the PDF endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    Pdf,
    Epub,
    Docx,
    Pptx,
    Azw,
    Azw3,
    Kfx,
    Mobi,
    Djvu,
    Doc,
    Wpd,
    Odt,
}

impl InputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Epub => "epub",
            Self::Docx => "docx",
            Self::Pptx => "pptx",
            Self::Azw => "azw",
            Self::Azw3 => "azw3",
            Self::Kfx => "kfx",
            Self::Mobi => "mobi",
            Self::Djvu => "djvu",
            Self::Doc => "doc",
            Self::Wpd => "wpd",
            Self::Odt => "odt",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Document export format produced by the conversion pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentOutputFormat {
    /// Mathpix Markdown.
    Mmd,
    /// Standard Markdown.
    Md,
    Docx,
    /// LaTeX with included images, zipped.
    LatexZip,
    Html,
    /// PDF rendered from HTML.
    PdfHtml,
    /// PDF with selectable LaTeX equations.
    PdfLatex,
}

impl DocumentOutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mmd => "mmd",
            Self::Md => "md",
            Self::Docx => "docx",
            Self::LatexZip => "latex_zip",
            Self::Html => "html",
            Self::PdfHtml => "pdf_html",
            Self::PdfLatex => "pdf_latex",
        }
    }
}

impl fmt::Display for DocumentOutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_lookup() {
        assert_eq!(ImageFormat::from_extension(".jpg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension(".tif"), Some(ImageFormat::Tiff));
        assert_eq!(ImageFormat::from_extension(".pic"), Some(ImageFormat::Hdr));
        assert_eq!(ImageFormat::from_extension(".docx"), None);
    }

    #[test]
    fn wire_names() {
        assert_eq!(
            serde_json::to_value(ResponseFormat::LatexStyled).unwrap(),
            serde_json::json!("latex_styled")
        );
        assert_eq!(
            serde_json::to_value(ImageFormat::Jpeg2000).unwrap(),
            serde_json::json!("jp2")
        );
        assert_eq!(
            serde_json::to_value(DocumentOutputFormat::PdfLatex).unwrap(),
            serde_json::json!("pdf_latex")
        );
    }
}
