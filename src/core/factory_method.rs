//! Factory Method: creators decide which concrete product gets built.

use crate::domain::model::ProductKind;
use crate::domain::ports::OutputSink;
use crate::utils::error::{PatternError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Something a creator produces. Products can only identify themselves.
pub trait Product: fmt::Debug + Send + Sync {
    fn kind(&self) -> ProductKind;

    fn type_name(&self) -> &'static str {
        self.kind().type_name()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConcreteProductA;

impl Product for ConcreteProductA {
    fn kind(&self) -> ProductKind {
        ProductKind::A
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConcreteProductB;

impl Product for ConcreteProductB {
    fn kind(&self) -> ProductKind {
        ProductKind::B
    }
}

/// Produces a product without the caller naming its concrete type.
pub trait Creator: fmt::Debug + Send + Sync {
    fn factory_method(&self) -> Box<dyn Product>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteCreatorA;

impl Creator for ConcreteCreatorA {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProductA)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteCreatorB;

impl Creator for ConcreteCreatorB {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProductB)
    }
}

/// Configuration-facing tag for picking a creator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreatorKind {
    A,
    B,
}

impl CreatorKind {
    pub fn creator(self) -> Box<dyn Creator> {
        match self {
            CreatorKind::A => Box::new(ConcreteCreatorA),
            CreatorKind::B => Box::new(ConcreteCreatorB),
        }
    }
}

impl fmt::Display for CreatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreatorKind::A => f.write_str("A"),
            CreatorKind::B => f.write_str("B"),
        }
    }
}

impl FromStr for CreatorKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "concretecreatora" => Ok(CreatorKind::A),
            "b" | "concretecreatorb" => Ok(CreatorKind::B),
            _ => Err(PatternError::invalid_value(
                "creators",
                s,
                "expected A or B",
            )),
        }
    }
}

pub fn creation_message(product: &dyn Product) -> String {
    format!("Created {}", product.type_name())
}

/// Walks a list of creators and reports every product they build.
#[derive(Debug)]
pub struct FactoryMethodDemo {
    creators: Vec<Box<dyn Creator>>,
    pause: bool,
}

impl FactoryMethodDemo {
    pub fn new(creators: Vec<Box<dyn Creator>>) -> Self {
        Self {
            creators,
            pause: true,
        }
    }

    pub fn from_kinds(kinds: &[CreatorKind]) -> Self {
        Self::new(kinds.iter().map(|kind| kind.creator()).collect())
    }

    /// Whether to block for input once every product is reported.
    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    pub fn run<S: OutputSink + ?Sized>(&self, sink: &S) -> Result<Vec<String>> {
        let mut lines = Vec::with_capacity(self.creators.len());

        for creator in &self.creators {
            let product = creator.factory_method();
            let line = creation_message(product.as_ref());
            tracing::debug!(creator = ?creator, product = product.type_name(), "Product created");
            sink.show(&line)?;
            lines.push(line);
        }

        if self.pause {
            sink.wait_for_input()?;
        }

        Ok(lines)
    }
}

impl Default for FactoryMethodDemo {
    fn default() -> Self {
        Self::from_kinds(&[CreatorKind::A, CreatorKind::B])
    }
}
