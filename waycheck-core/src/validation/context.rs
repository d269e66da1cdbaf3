//! Editor collaborators the validator consults

use itertools::Itertools;

use crate::loading::ValidatorConfig;
use crate::model::{EntityRef, GraphQuery};

use super::highway::highway_kind;

/// Human readable name of an entity for issue messages
pub trait LabelFormatter {
    fn display_label(&self, entity: EntityRef<'_>) -> String;
}

/// Whether the editor would allow an entity to be deleted
pub trait DeleteGuard {
    fn can_delete(&self, entity: EntityRef<'_>, graph: &dyn GraphQuery) -> bool;
}

/// Labels from `name`, then `ref`, then the highway class, then the id
#[derive(Debug, Clone, Copy, Default)]
pub struct TagLabeler;

impl LabelFormatter for TagLabeler {
    fn display_label(&self, entity: EntityRef<'_>) -> String {
        if let Some(name) = entity.tag("name").filter(|name| !name.is_empty()) {
            return name.to_owned();
        }
        if let Some(reference) = entity.tag("ref").filter(|r| !r.is_empty()) {
            return reference.to_owned();
        }
        match highway_kind(entity.tags()) {
            Some(kind) => capitalize(&kind.as_str().split('_').join(" ")),
            None => entity.id().to_string(),
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AllowDelete;

impl DeleteGuard for AllowDelete {
    fn can_delete(&self, _entity: EntityRef<'_>, _graph: &dyn GraphQuery) -> bool {
        true
    }
}

/// Refuses to delete entities some relation still lists as a member
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtectRelationMembers;

impl DeleteGuard for ProtectRelationMembers {
    fn can_delete(&self, entity: EntityRef<'_>, graph: &dyn GraphQuery) -> bool {
        graph.parent_relation_ids(entity.id()).is_empty()
    }
}

/// Graph snapshot plus the collaborators one validation pass runs with
pub struct ValidationContext<'a, G> {
    pub(crate) graph: &'a G,
    pub(crate) labeler: &'a (dyn LabelFormatter + Sync),
    delete_guard: Option<&'a (dyn DeleteGuard + Sync)>,
    pub(crate) config: ValidatorConfig,
}

impl<'a, G: GraphQuery> ValidationContext<'a, G> {
    /// Context with [`TagLabeler`], [`AllowDelete`] and the default config
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            labeler: &TagLabeler,
            delete_guard: None,
            config: ValidatorConfig::default(),
        }
    }

    #[must_use]
    pub fn with_labeler(mut self, labeler: &'a (dyn LabelFormatter + Sync)) -> Self {
        self.labeler = labeler;
        self
    }

    /// Host supplied delete check. It takes precedence over
    /// `protect_relation_members` regardless of call order.
    #[must_use]
    pub fn with_delete_guard(mut self, delete_guard: &'a (dyn DeleteGuard + Sync)) -> Self {
        self.delete_guard = Some(delete_guard);
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Guard in effect: the host's, else the one the config selects
    pub(crate) fn delete_guard(&self) -> &'a (dyn DeleteGuard + Sync) {
        match self.delete_guard {
            Some(guard) => guard,
            None if self.config.protect_relation_members => &ProtectRelationMembers,
            None => &AllowDelete,
        }
    }
}
