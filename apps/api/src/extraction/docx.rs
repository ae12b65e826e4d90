use docx_rs::{DocumentChild, InsertChild, Paragraph, ParagraphChild, Run, RunChild};

use super::ExtractionError;

/// Extracts body paragraphs from an in-memory DOCX, one per line.
/// Tables, headers and footers are not part of the output.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(paragraph_text(p)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_children(&paragraph.children, &mut text);
    text
}

/// Hyperlinks and tracked insertions wrap their own runs; both are part of
/// the visible paragraph text.
fn push_children(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(run, text),
            ParagraphChild::Hyperlink(link) => push_children(&link.children, text),
            ParagraphChild::Insert(insert) => {
                for insert_child in &insert.children {
                    if let InsertChild::Run(run) = insert_child {
                        push_run(run, text);
                    }
                }
            }
            _ => {}
        }
    }
}

fn push_run(run: &Run, text: &mut String) {
    for run_child in &run.children {
        match run_child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}
