//! Record and invocation builders.

use pdguard_schemas::fields::PERSONAL_DATA_ENTITY;
use pdguard_schemas::{Entity, ExecutionContext, MessageName};
use uuid::Uuid;

/// An empty personal-data record without identifier.
pub fn personal_data() -> Entity {
    Entity::new(PERSONAL_DATA_ENTITY)
}

/// A depth-1 create of `target` by a random user.
pub fn create_context(target: Entity) -> ExecutionContext {
    ExecutionContext::new(MessageName::Create, 1, Uuid::new_v4()).with_target(target)
}

/// A depth-1 update of record `id`, with `prior` registered as the
/// pre-operation snapshot when given.
pub fn update_context(id: Uuid, target: Entity, prior: Option<Entity>) -> ExecutionContext {
    let ctx = ExecutionContext::new(MessageName::Update, 1, Uuid::new_v4())
        .with_primary_entity_id(id)
        .with_target(target.with_id(id));
    match prior {
        Some(snapshot) => ctx.with_pre_image(snapshot.with_id(id)),
        None => ctx,
    }
}
