//! Embedded hyperlink collection from document metadata
//!
//! PDF link annotations and DOCX relationship parts often carry profile URLs
//! that never show up in the extracted text. Collection is best effort: any
//! failure degrades to an empty list so the text-pattern fallbacks still run.

use crate::input::file_detector::DocumentFormat;
use log::{debug, warn};
use lopdf::{Document, Object};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use std::path::Path;
use tokio::fs;
use zip::ZipArchive;

pub async fn collect_hyperlinks(path: &Path, format: DocumentFormat) -> Vec<String> {
    let result = match format {
        DocumentFormat::Pdf => pdf_hyperlinks(path).await,
        DocumentFormat::Docx => docx_hyperlinks(path).await,
        DocumentFormat::Unknown => Ok(Vec::new()),
    };

    match result {
        Ok(uris) => {
            debug!(
                "Collected {} embedded hyperlink(s) from {}",
                uris.len(),
                path.display()
            );
            uris
        }
        Err(e) => {
            warn!(
                "Could not read embedded hyperlinks from {}: {}",
                path.display(),
                e
            );
            Vec::new()
        }
    }
}

async fn pdf_hyperlinks(path: &Path) -> anyhow::Result<Vec<String>> {
    let bytes = fs::read(path).await?;
    pdf_hyperlinks_from_bytes(&bytes)
}

/// Walk every page's link annotations and pull the /URI action targets.
pub fn pdf_hyperlinks_from_bytes(bytes: &[u8]) -> anyhow::Result<Vec<String>> {
    let doc = Document::load_mem(bytes)?;
    let mut uris = Vec::new();

    for (_number, page_id) in doc.get_pages() {
        let page = match doc.get_dictionary(page_id) {
            Ok(page) => page,
            Err(_) => continue,
        };
        let annots = match page.get(b"Annots") {
            Ok(annots) => annots,
            Err(_) => continue,
        };
        let annots = match resolve(&doc, annots) {
            Object::Array(items) => items,
            _ => continue,
        };

        for annot in annots {
            if let Some(uri) = annotation_uri(&doc, annot) {
                uris.push(uri);
            }
        }
    }

    Ok(uris)
}

fn annotation_uri(doc: &Document, annot: &Object) -> Option<String> {
    let annot = match resolve(doc, annot) {
        Object::Dictionary(dict) => dict,
        _ => return None,
    };
    let action = annot.get(b"A").ok()?;
    let action = match resolve(doc, action) {
        Object::Dictionary(dict) => dict,
        _ => return None,
    };
    let uri = action.get(b"URI").ok()?;
    match resolve(doc, uri) {
        Object::String(bytes, _) => Some(String::from_utf8_lossy(bytes).into_owned()),
        _ => None,
    }
}

fn resolve<'a>(doc: &'a Document, object: &'a Object) -> &'a Object {
    match object {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(object),
        _ => object,
    }
}

async fn docx_hyperlinks(path: &Path) -> anyhow::Result<Vec<String>> {
    let bytes = fs::read(path).await?;
    docx_hyperlinks_from_bytes(&bytes)
}

/// Read `word/_rels/document.xml.rels` and keep every absolute http(s)
/// relationship target. A DOCX without the part simply has no hyperlinks.
pub fn docx_hyperlinks_from_bytes(bytes: &[u8]) -> anyhow::Result<Vec<String>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let mut xml = String::new();
    match archive.by_name("word/_rels/document.xml.rels") {
        Ok(mut part) => {
            part.read_to_string(&mut xml)?;
        }
        Err(_) => return Ok(Vec::new()),
    }

    Ok(relationship_targets(&xml)?)
}

fn relationship_targets(xml: &str) -> std::result::Result<Vec<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut uris = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Empty(e) | Event::Start(e) if e.local_name().as_ref() == b"Relationship" => {
                for attr in e.attributes().flatten() {
                    if attr.key.local_name().as_ref() == b"Target" {
                        if let Ok(value) = attr.unescape_value() {
                            if value.starts_with("http") {
                                uris.push(value.into_owned());
                            }
                        }
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(uris)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::dictionary;

    fn pdf_with_link_annotation(uri: &str) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let action = dictionary! {
            "S" => "URI",
            "URI" => Object::string_literal(uri),
        };
        let annotation_id = doc.add_object(dictionary! {
            "Type" => "Annot",
            "Subtype" => "Link",
            "Rect" => vec![0.into(), 0.into(), 100.into(), 20.into()],
            "A" => Object::Dictionary(action),
        });
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Annots" => vec![annotation_id.into()],
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_pdf_link_annotations_are_collected() {
        let bytes = pdf_with_link_annotation("https://github.com/janedoe");
        let uris = pdf_hyperlinks_from_bytes(&bytes).unwrap();
        assert_eq!(uris, vec!["https://github.com/janedoe".to_string()]);
    }

    #[test]
    fn test_relationship_targets_keep_only_absolute_urls() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
            <Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
              <Relationship Id="rId1" Type=".../styles" Target="styles.xml"/>
              <Relationship Id="rId2" Type=".../hyperlink" Target="https://linkedin.com/in/janedoe" TargetMode="External"/>
              <Relationship Id="rId3" Type=".../hyperlink" Target="http://github.com/janedoe" TargetMode="External"/>
            </Relationships>"#;

        let uris = relationship_targets(xml).unwrap();
        assert_eq!(
            uris,
            vec![
                "https://linkedin.com/in/janedoe".to_string(),
                "http://github.com/janedoe".to_string(),
            ]
        );
    }

    #[test]
    fn test_docx_without_rels_part_has_no_hyperlinks() {
        use std::io::Write;
        use zip::write::FileOptions;

        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            writer
                .start_file("word/document.xml", FileOptions::default())
                .unwrap();
            writer.write_all(b"<w:document/>").unwrap();
            writer.finish().unwrap();
        }

        let uris = docx_hyperlinks_from_bytes(cursor.get_ref()).unwrap();
        assert!(uris.is_empty());
    }
}
