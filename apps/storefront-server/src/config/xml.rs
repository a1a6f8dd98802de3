//! XML settings file provider for figment
//!
//! The root element is a container and its name is ignored. Child elements
//! become nested keys, attributes become keys on their element, and leaf text
//! is parsed the same way environment values are (`true`, `8080`, strings).
//!
//! ```xml
//! <configuration>
//!   <environment>Development</environment>
//!   <server bind_addr="127.0.0.1:5000" />
//!   <logging><json>true</json></logging>
//! </configuration>
//! ```

use figment::value::{Dict, Map, Value};
use figment::{Error, Metadata, Profile, Provider};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Provider reading an optional XML file; a missing file contributes nothing
#[derive(Debug, Clone)]
pub struct XmlFile {
    path: PathBuf,
}

impl XmlFile {
    pub fn file(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Provider for XmlFile {
    fn metadata(&self) -> Metadata {
        Metadata::named(format!("XML file {}", self.path.display()))
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(Error::from(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };

        let dict = parse(&raw)
            .map_err(|e| Error::from(format!("invalid XML in {}: {e}", self.path.display())))?;

        Ok(Profile::Default.collect(dict))
    }
}

struct Element {
    name: String,
    children: Dict,
    text: String,
}

impl Element {
    fn open(start: &BytesStart<'_>) -> Result<Self, quick_xml::Error> {
        let mut children = Dict::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?;
            children.insert(key, scalar(&value));
        }

        Ok(Self {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            children,
            text: String::new(),
        })
    }

    fn into_value(self) -> Value {
        if self.children.is_empty() {
            scalar(self.text.trim())
        } else {
            Value::from(self.children)
        }
    }
}

fn scalar(raw: &str) -> Value {
    raw.parse::<Value>()
        .unwrap_or_else(|_| Value::from(raw.to_string()))
}

/// Parse an XML document into a figment dictionary
pub fn parse(raw: &str) -> Result<Dict, quick_xml::Error> {
    let mut reader = Reader::from_str(raw);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root = Dict::new();

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(Element::open(&start)?),
            Event::Empty(start) => {
                let element = Element::open(&start)?;
                close(&mut stack, &mut root, element);
            }
            Event::Text(text) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&text.unescape()?);
                }
            }
            Event::CData(data) => {
                if let Some(top) = stack.last_mut() {
                    top.text
                        .push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::End(_) => {
                if let Some(element) = stack.pop() {
                    close(&mut stack, &mut root, element);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(root)
}

fn close(stack: &mut [Element], root: &mut Dict, element: Element) {
    match stack.last_mut() {
        Some(parent) => {
            let name = element.name.clone();
            parent.children.insert(name, element.into_value());
        }
        // Root element: its children are the top-level keys
        None => *root = element.children,
    }
}
