use crate::core::math::Rect;
use crate::systems::collision::BodyClass;
use crate::systems::rigid_body::{Body, Collider, Transform2D};

/// Capabilities an object may carry. Only the body is mandatory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    Transform,
    Body,
    Collider,
}

/// A registered entity: a body plus optional placement and shape.
pub struct PhysicsObject {
    pub(crate) name: String,
    pub(crate) class: BodyClass,
    pub(crate) transform: Option<Box<dyn Transform2D>>,
    pub(crate) body: Body,
    pub(crate) collider: Option<Collider>,
}

impl PhysicsObject {
    pub fn new(name: impl Into<String>, body: Body) -> Self {
        Self {
            name: name.into(),
            class: BodyClass::Dynamic,
            transform: None,
            body,
            collider: None,
        }
    }

    pub fn with_transform<T: Transform2D + 'static>(mut self, transform: T) -> Self {
        self.transform = Some(Box::new(transform));
        self
    }

    pub fn with_collider(mut self, collider: Collider) -> Self {
        self.collider = Some(collider);
        self
    }

    pub fn with_class(mut self, class: BodyClass) -> Self {
        self.class = class;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> BodyClass {
        self.class
    }

    pub fn set_class(&mut self, class: BodyClass) {
        self.class = class;
    }

    pub fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::Transform => self.transform.is_some(),
            Capability::Body => true,
            Capability::Collider => self.collider.is_some(),
        }
    }

    pub fn transform(&self) -> Option<&dyn Transform2D> {
        self.transform.as_deref()
    }

    pub fn transform_mut(&mut self) -> Option<&mut (dyn Transform2D + 'static)> {
        self.transform.as_deref_mut()
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    pub fn collider(&self) -> Option<&Collider> {
        self.collider.as_ref()
    }

    pub fn collider_mut(&mut self) -> Option<&mut Collider> {
        self.collider.as_mut()
    }

    /// Collider box in world space; `None` without a transform or collider.
    pub fn world_aabb(&self) -> Option<Rect> {
        let transform = self.transform.as_deref()?;
        let collider = self.collider.as_ref()?;
        Some(collider.world_aabb(transform))
    }
}

impl std::fmt::Debug for PhysicsObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhysicsObject")
            .field("name", &self.name)
            .field("class", &self.class)
            .field("position", &self.transform.as_ref().map(|t| t.position()))
            .field("body", &self.body)
            .field("collider", &self.collider)
            .finish()
    }
}
