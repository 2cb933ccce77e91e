//! Side navigation index.
//!
//! The side navigation lists every loaded document, then a spacer, then one
//! "Definitions" group collecting the named definitions of all documents.
//!
//! # Definition Ownership
//!
//! Several documents may define the same key. The group lists each key once,
//! sorted, and links it to the first document in load order that owns it.
//! Keys whose owning definition is an enum are left out.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::lookup::Lookup;
use crate::reference::Reference;
use crate::schema::Schema;
use crate::title::title;

/// Title of the definitions group.
pub const DEFINITIONS_GROUP_TITLE: &str = "Definitions";

/// Link to a single schema node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SingleSideNavLink {
    /// Display title.
    pub title: String,
    /// Link target.
    pub reference: Reference,
}

/// Titled group of links. Groups are not link targets themselves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GroupSideNavLink {
    /// Display title.
    pub title: String,
    /// Links in display order.
    pub children: Vec<SingleSideNavLink>,
}

/// Entry of the side navigation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SideNavLink {
    /// A link.
    Single(SingleSideNavLink),
    /// A group of links.
    Group(GroupSideNavLink),
    /// Separator between sections.
    Spacer,
}

impl SideNavLink {
    /// Display title. `None` for spacers.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Single(link) => Some(&link.title),
            Self::Group(group) => Some(&group.title),
            Self::Spacer => None,
        }
    }

    /// Link target. Only single links have one.
    #[must_use]
    pub fn reference(&self) -> Option<&Reference> {
        match self {
            Self::Single(link) => Some(&link.reference),
            Self::Group(_) | Self::Spacer => None,
        }
    }
}

/// Build the side navigation for a document set.
///
/// `_anchor` is the lookup of the document currently being viewed. Links are
/// derived from `schemas` alone; the anchor is never resolved against.
///
/// The output is fully determined by `schemas` (content and order).
pub fn build_links(schemas: &[Schema], _anchor: &dyn Lookup) -> Vec<SideNavLink> {
    let mut links: Vec<SideNavLink> = schemas
        .iter()
        .filter(|schema| schema.as_node().is_some())
        .map(|schema| {
            SideNavLink::Single(SingleSideNavLink {
                title: title("#", Some(schema)),
                reference: Reference::document_root(schema.title().unwrap_or_default()),
            })
        })
        .collect();
    links.push(SideNavLink::Spacer);

    if let Some(group) = definitions_group(schemas) {
        links.push(SideNavLink::Group(group));
    }

    links
}

fn definitions_group(schemas: &[Schema]) -> Option<GroupSideNavLink> {
    let owners: Vec<&Schema> = schemas
        .iter()
        .filter(|schema| schema.definitions().is_some())
        .collect();
    if owners.is_empty() {
        return None;
    }

    let keys: BTreeSet<&str> = owners
        .iter()
        .filter_map(|schema| schema.definitions())
        .flat_map(|definitions| definitions.keys().map(String::as_str))
        .collect();

    let children = keys
        .into_iter()
        .filter_map(|key| definition_link(&owners, key))
        .collect();

    Some(GroupSideNavLink {
        title: DEFINITIONS_GROUP_TITLE.to_owned(),
        children,
    })
}

fn definition_link(owners: &[&Schema], key: &str) -> Option<SingleSideNavLink> {
    let (owner, definition) = owners.iter().find_map(|schema| {
        schema
            .definitions()
            .and_then(|definitions| definitions.get(key))
            .map(|definition| (*schema, definition))
    })?;

    let reference = Reference::definition(owner.title().unwrap_or_default(), key);
    let title = match definition {
        Schema::Node(node) if node.is_enum() => return None,
        Schema::Anything | Schema::Nothing => key.to_owned(),
        Schema::Node(_) => title(reference.as_str(), Some(definition)),
    };

    Some(SingleSideNavLink { title, reference })
}
