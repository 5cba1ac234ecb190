use crate::coordinates::{resolve_coordinates, CoordinateNode, Coordinates};
use serde::{Deserialize, Serialize};

/// A decoded `<dependency>` element.
#[derive(Debug, Default, Deserialize)]
pub struct DependencyNode {
	#[serde(rename = "groupId")]
	pub group_id: Option<String>,
	#[serde(rename = "artifactId")]
	pub artifact_id: Option<String>,
	#[serde(rename = "version")]
	pub version: Option<String>,
	#[serde(rename = "scope")]
	pub scope: Option<String>,
	#[serde(rename = "type")]
	pub dependency_type: Option<String>,
	#[serde(rename = "classifier")]
	pub classifier: Option<String>,
	#[serde(rename = "optional")]
	pub optional: Option<String>,
	#[serde(rename = "systemPath")]
	pub system_path: Option<String>,
}

impl CoordinateNode for DependencyNode {
	fn group_id(&self) -> Option<&str> {
		self.group_id.as_deref()
	}

	fn artifact_id(&self) -> Option<&str> {
		self.artifact_id.as_deref()
	}

	fn version(&self) -> Option<&str> {
		self.version.as_deref()
	}
}

/// A declared dependency. Values are the literal text of the POM; nothing is interpolated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
	#[serde(flatten)]
	pub coordinates: Coordinates,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub scope: Option<String>,
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub dependency_type: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub classifier: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub optional: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub system_path: Option<String>,
}

impl From<&DependencyNode> for Dependency {
	fn from(node: &DependencyNode) -> Self {
		Self {
			coordinates: resolve_coordinates(node),
			scope: node.scope.clone(),
			dependency_type: node.dependency_type.clone(),
			classifier: node.classifier.clone(),
			optional: node.optional.clone(),
			system_path: node.system_path.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dependency_keeps_literal_text() {
		let node = DependencyNode {
			group_id: Some("org.example".into()),
			artifact_id: Some("lib".into()),
			version: Some("${lib.version}".into()),
			scope: Some("test".into()),
			optional: Some("true".into()),
			..Default::default()
		};

		let dependency = Dependency::from(&node);
		assert_eq!(dependency.coordinates.version.as_deref(), Some("${lib.version}"));
		assert_eq!(dependency.scope.as_deref(), Some("test"));
		assert_eq!(dependency.optional.as_deref(), Some("true"));
		assert_eq!(dependency.classifier, None);
	}

	#[test]
	fn serializes_with_pom_field_names() {
		let node = DependencyNode {
			group_id: Some("g".into()),
			artifact_id: Some("a".into()),
			dependency_type: Some("test-jar".into()),
			..Default::default()
		};

		let json = serde_json::to_value(Dependency::from(&node)).unwrap();
		assert_eq!(
			json,
			serde_json::json!({"groupId": "g", "artifactId": "a", "type": "test-jar"})
		);
	}
}
