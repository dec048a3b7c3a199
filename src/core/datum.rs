//Copyright 2024 Felix Engl
//
//Licensed under the Apache License, Version 2.0 (the "License");
//you may not use this file except in compliance with the License.
//You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
//Unless required by applicable law or agreed to in writing, software
//distributed under the License is distributed on an "AS IS" BASIS,
//WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//See the License for the specific language governing permissions and
//limitations under the License.

use std::ops::Add;
use serde::{Deserialize, Serialize};
use crate::core::error::RecastError;
use crate::core::input::RawText;

/// The owned sequence of strings a recast works on.
/// Every mutation replaces the whole sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Datum {
    elements: Option<Vec<String>>,
}

impl Datum {
    pub fn new(elements: Vec<String>) -> Self {
        Self { elements: Some(elements) }
    }

    /// Normalizes [raw] and replaces the current elements.
    pub fn set(&mut self, raw: impl Into<RawText>) -> Result<(), RecastError> {
        self.elements = Some(raw.into().normalize()?);
        Ok(())
    }

    pub fn replace(&mut self, elements: Vec<String>) {
        self.elements = Some(elements);
    }

    pub fn clear(&mut self) {
        self.elements = None;
    }

    pub fn is_set(&self) -> bool {
        self.elements.is_some()
    }

    /// The elements, empty if nothing was set.
    pub fn elements(&self) -> &[String] {
        self.elements.as_deref().unwrap_or_default()
    }

    pub fn count(&self) -> usize {
        self.elements.as_ref().map_or(0, Vec::len)
    }

    /// Concatenates both sequences, order preserved.
    pub fn combine(&self, other: &Datum) -> Datum {
        let mut elements = Vec::with_capacity(self.count() + other.count());
        elements.extend_from_slice(self.elements());
        elements.extend_from_slice(other.elements());
        Datum::new(elements)
    }

    pub fn into_elements(self) -> Vec<String> {
        self.elements.unwrap_or_default()
    }
}

impl Add for Datum {
    type Output = Datum;

    fn add(self, rhs: Self) -> Self::Output {
        self.combine(&rhs)
    }
}

impl<'a> Add<&'a Datum> for &'a Datum {
    type Output = Datum;

    fn add(self, rhs: &'a Datum) -> Self::Output {
        self.combine(rhs)
    }
}

#[cfg(test)]
mod test {
    use crate::core::datum::Datum;

    #[test]
    fn unset_has_no_elements(){
        let datum = Datum::default();
        assert!(!datum.is_set());
        assert_eq!(0, datum.count());
        assert!(datum.elements().is_empty());
    }

    #[test]
    fn set_replaces_everything(){
        let mut datum = Datum::default();
        datum.set(vec!["a", "b"]).unwrap();
        assert_eq!(2, datum.count());
        datum.set("c").unwrap();
        assert_eq!(vec!["c"], datum.elements());
    }

    #[test]
    fn combine_keeps_order(){
        let left = Datum::new(vec!["a".to_string(), "b".to_string()]);
        let right = Datum::new(vec!["c".to_string()]);
        let combined = &left + &right;
        assert_eq!(vec!["a", "b", "c"], combined.elements());
        assert_eq!(combined.count(), left.count() + right.count());
        assert_eq!(combined, left + right);
    }
}
