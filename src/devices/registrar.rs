/// Host callback receiving the entities a platform created.
///
/// Setup hands over every entity for one entry in a single call, even when
/// the list is empty.
pub trait EntityRegistrar<E> {
    fn add_entities(&self, entities: Vec<E>);
}

impl<E, F> EntityRegistrar<E> for F
where
    F: Fn(Vec<E>),
{
    fn add_entities(&self, entities: Vec<E>) {
        self(entities)
    }
}
