use crate::coordinates::CoordinateNode;
use crate::dependencies::Dependencies;
use crate::error::PomError;
use crate::parent::ParentNode;
use crate::repository::Repositories;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;

/// The decoded `<project>` element. Elements outside the handled vocabulary are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectNode {
	#[serde(rename = "groupId")]
	pub group_id: Option<String>,
	#[serde(rename = "artifactId")]
	pub artifact_id: Option<String>,
	#[serde(rename = "version")]
	pub version: Option<String>,
	#[serde(rename = "parent")]
	pub parent: Option<ParentNode>,
	#[serde(rename = "dependencies")]
	pub dependencies: Option<Dependencies>,
	#[serde(rename = "repositories")]
	pub repositories: Option<Repositories>,
}

impl CoordinateNode for ProjectNode {
	fn group_id(&self) -> Option<&str> {
		self.group_id.as_deref()
	}

	fn artifact_id(&self) -> Option<&str> {
		self.artifact_id.as_deref()
	}

	fn version(&self) -> Option<&str> {
		self.version.as_deref()
	}

	fn parent(&self) -> Option<&dyn CoordinateNode> {
		self.parent.as_ref().map(|p| p as &dyn CoordinateNode)
	}
}

/// Decodes POM text into a [`ProjectNode`].
pub fn decode_project(xml: &str) -> Result<ProjectNode, PomError> {
	let root = root_element(xml)?;
	if root != "project" {
		return Err(PomError::NotAProject { found: root });
	}
	Ok(quick_xml::de::from_str(xml)?)
}

/// Name of the single root element. The whole document is read so that a second
/// top-level element is rejected too.
fn root_element(xml: &str) -> Result<String, PomError> {
	let mut reader = Reader::from_str(xml);
	let mut root = None;
	let mut depth = 0usize;
	loop {
		match reader.read_event()? {
			Event::Start(e) => {
				if depth == 0 {
					set_root(&mut root, e.local_name().as_ref())?;
				}
				depth += 1;
			}
			Event::Empty(e) if depth == 0 => set_root(&mut root, e.local_name().as_ref())?,
			Event::End(_) => depth = depth.saturating_sub(1),
			Event::Eof => return root.ok_or(PomError::Empty),
			_ => {}
		}
	}
}

fn set_root(root: &mut Option<String>, name: &[u8]) -> Result<(), PomError> {
	let name = String::from_utf8_lossy(name).into_owned();
	if root.is_some() {
		return Err(PomError::MultipleRoots { second: name });
	}
	*root = Some(name);
	Ok(())
}
