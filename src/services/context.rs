use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct RequestContext {
    pub user_id: Uuid,
}
