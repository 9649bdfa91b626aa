use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::ser::{Serialize, SerializeStruct, Serializer};

struct TraderInner {
    name: String,
    city: RefCell<String>,
}

/// Shared handle to a trader. Clones point at the same trader,
/// so a city change made through one handle is seen by all of them.
#[derive(Clone)]
pub struct Trader(Rc<TraderInner>);

impl Trader {
    pub fn new(name: &str, city: &str) -> Trader {
        Trader(Rc::new(TraderInner {
            name: name.to_owned(),
            city: RefCell::new(city.to_owned()),
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn city(&self) -> String {
        self.0.city.borrow().clone()
    }

    pub fn set_city(&self, city: &str) {
        *self.0.city.borrow_mut() = city.to_owned();
    }

    pub fn is_in(&self, city: &str) -> bool {
        *self.0.city.borrow() == city
    }

    /// True when both handles refer to the very same trader,
    /// as opposed to `==` which compares name and city.
    pub fn same_as(&self, other: &Trader) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Trader {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
            || (self.0.name == other.0.name && *self.0.city.borrow() == *other.0.city.borrow())
    }
}

impl Eq for Trader {}

impl fmt::Display for Trader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0.name, self.0.city.borrow())
    }
}

impl fmt::Debug for Trader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trader {} in {}", self.0.name, self.0.city.borrow())
    }
}

impl Serialize for Trader {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Trader", 2)?;
        state.serialize_field("name", &self.0.name)?;
        state.serialize_field("city", &*self.0.city.borrow())?;
        return state.end();
    }
}
