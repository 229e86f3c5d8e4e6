use crate::clu::Entity;
use serde::Serialize;

/// Display-ready copy of one extracted entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityRecord {
    pub category: String,
    pub text: String,
    pub offset: u64,
    pub length: u64,
}

/// How the service reported entities for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityPresence {
    Absent,
    Empty,
    Present,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum EntitySection {
    Found(Vec<EntityRecord>),
    NoEntities,
}

impl From<&Entity> for EntityRecord {
    fn from(entity: &Entity) -> Self {
        Self {
            category: entity.category.clone(),
            text: entity.text.clone(),
            offset: entity.offset,
            length: entity.length,
        }
    }
}

pub fn entity_presence(entities: Option<&[Entity]>) -> EntityPresence {
    match entities {
        None => EntityPresence::Absent,
        Some([]) => EntityPresence::Empty,
        Some(_) => EntityPresence::Present,
    }
}

/// One record per entity, same order. An absent field and an empty list both
/// become [`EntitySection::NoEntities`].
pub fn format_entities(entities: Option<&[Entity]>) -> EntitySection {
    match entities {
        Some(list) if !list.is_empty() => {
            EntitySection::Found(list.iter().map(EntityRecord::from).collect())
        }
        _ => EntitySection::NoEntities,
    }
}

impl EntitySection {
    pub fn records(&self) -> &[EntityRecord] {
        match self {
            Self::Found(records) => records,
            Self::NoEntities => &[],
        }
    }
}
