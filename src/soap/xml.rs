use crate::error::AppError;
use quick_xml::Reader;
use quick_xml::events::Event;

/// Text content of the first element named `tag`, anywhere in the document
///
/// Returns `Ok(None)` when no such element exists. Tag names are matched
/// by local name, so namespace prefixes in the response are ignored.
pub fn first_text(xml: &str, tag: &str) -> Result<Option<String>, AppError> {
    Ok(collect(xml, None, tag, true)?.into_iter().next())
}

/// Text content of every element named `tag`, in document order
pub fn all_texts(xml: &str, tag: &str) -> Result<Vec<String>, AppError> {
    collect(xml, None, tag, false)
}

/// Text content of every `tag` element enclosed by a `section` element
///
/// `tag` elements outside any `section` are not collected. A section with
/// no `tag` children yields an empty vector.
pub fn section_texts(xml: &str, section: &str, tag: &str) -> Result<Vec<String>, AppError> {
    collect(xml, Some(section), tag, false)
}

fn collect(
    xml: &str,
    section: Option<&str>,
    tag: &str,
    stop_after_first: bool,
) -> Result<Vec<String>, AppError> {
    let mut reader = Reader::from_str(xml);
    let mut texts = Vec::new();
    // With no section constraint the whole document counts as in scope.
    let mut section_depth = usize::from(section.is_none());
    let mut current: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.local_name();
                if section.is_some_and(|s| name.as_ref() == s.as_bytes()) {
                    section_depth += 1;
                } else if section_depth > 0 && current.is_none() && name.as_ref() == tag.as_bytes()
                {
                    current = Some(String::new());
                }
            }
            Event::Empty(e) => {
                // A self-closed element is present but empty.
                if section_depth > 0 && current.is_none() && e.local_name().as_ref() == tag.as_bytes()
                {
                    texts.push(String::new());
                    if stop_after_first {
                        break;
                    }
                }
            }
            Event::End(e) => {
                let name = e.local_name();
                if section.is_some_and(|s| name.as_ref() == s.as_bytes()) {
                    section_depth = section_depth.saturating_sub(1);
                } else if name.as_ref() == tag.as_bytes() {
                    if let Some(text) = current.take() {
                        texts.push(text.trim().to_string());
                        if stop_after_first {
                            break;
                        }
                    }
                }
            }
            Event::Text(t) => {
                if let Some(current) = current.as_mut() {
                    current.push_str(&t.unescape()?);
                }
            }
            Event::CData(t) => {
                if let Some(current) = current.as_mut() {
                    current.push_str(&String::from_utf8_lossy(t.as_ref()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(texts)
}
