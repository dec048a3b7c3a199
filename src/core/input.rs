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

use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::core::error::RecastError;

/// An n-dimensional array of values with an explicit shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextArray {
    pub shape: Vec<usize>,
    pub values: Vec<Value>,
}

impl TextArray {
    pub fn new(shape: Vec<usize>, values: Vec<Value>) -> Self {
        Self { shape, values }
    }
}

/// A single named column of a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextColumn {
    pub name: String,
    pub values: Vec<Value>,
}

/// A table made of named columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextTable {
    pub columns: Vec<TextColumn>,
}

/// A labeled one dimensional series. The label is dropped on normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSeries {
    pub label: Option<String>,
    pub values: Vec<Value>,
}

/// Every input shape a recast accepts before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum RawText {
    Single(String),
    Strings(Vec<String>),
    Values(Vec<Value>),
    Array(TextArray),
    Table(TextTable),
    Series(TextSeries),
    Json(Value),
}

impl RawText {
    /// Coerces the input into an ordered sequence of strings.
    pub fn normalize(self) -> Result<Vec<String>, RecastError> {
        match self {
            RawText::Single(value) => Ok(vec![value]),
            RawText::Strings(values) => Ok(values),
            RawText::Values(values) => strings_of(values),
            RawText::Array(array) => {
                if array.shape.len() != 1 {
                    return Err(RecastError::InvalidShape(format!(
                        "expected a 1 dimensional array, got {} dimensions {:?}",
                        array.shape.len(),
                        array.shape
                    )));
                }
                if array.shape[0] != array.values.len() {
                    return Err(RecastError::InvalidShape(format!(
                        "array shape {:?} does not match its {} values",
                        array.shape,
                        array.values.len()
                    )));
                }
                strings_of(array.values)
            }
            RawText::Table(mut table) => {
                if table.columns.len() != 1 {
                    return Err(RecastError::InvalidShape(format!(
                        "expected a table with exactly 1 column, got {} columns",
                        table.columns.len()
                    )));
                }
                strings_of(table.columns.swap_remove(0).values)
            }
            RawText::Series(series) => strings_of(series.values),
            RawText::Json(value) => Self::from_json(value)?.normalize(),
        }
    }

    /// Interprets a parsed json document as one of the other shapes.
    pub fn from_json(value: Value) -> Result<RawText, RecastError> {
        match value {
            Value::String(value) => Ok(RawText::Single(value)),
            Value::Array(values) => {
                if values.iter().any(Value::is_array) {
                    let shape = infer_shape(&values);
                    let values = flatten(values);
                    Ok(RawText::Array(TextArray::new(shape, values)))
                } else {
                    Ok(RawText::Values(values))
                }
            }
            Value::Object(map) => {
                let columns = map
                    .into_iter()
                    .map(|(name, values)| match values {
                        Value::Array(values) => Ok(TextColumn { name, values }),
                        other => Err(RecastError::InvalidShape(format!(
                            "column {name} is not an array but {}",
                            json_type_name(&other)
                        ))),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(RawText::Table(TextTable { columns }))
            }
            other => Err(RecastError::InvalidShape(format!(
                "unsupported json document of type {}",
                json_type_name(&other)
            ))),
        }
    }
}

fn strings_of(values: Vec<Value>) -> Result<Vec<String>, RecastError> {
    values
        .into_iter()
        .enumerate()
        .map(|(position, value)| match value {
            Value::String(value) => Ok(value),
            other => Err(RecastError::InvalidElementType(format!(
                "element {position} is a {} and not a string",
                json_type_name(&other)
            ))),
        })
        .collect()
}

fn infer_shape(values: &[Value]) -> Vec<usize> {
    let mut shape = vec![values.len()];
    if let Some(Value::Array(inner)) = values.first() {
        shape.extend(infer_shape(inner));
    }
    shape
}

fn flatten(values: Vec<Value>) -> Vec<Value> {
    let mut result = Vec::with_capacity(values.len());
    for value in values {
        match value {
            Value::Array(inner) => result.extend(flatten(inner)),
            other => result.push(other),
        }
    }
    result
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<&str> for RawText {
    fn from(value: &str) -> Self {
        RawText::Single(value.to_string())
    }
}

impl From<String> for RawText {
    fn from(value: String) -> Self {
        RawText::Single(value)
    }
}

impl From<Vec<String>> for RawText {
    fn from(value: Vec<String>) -> Self {
        RawText::Strings(value)
    }
}

impl From<Vec<&str>> for RawText {
    fn from(value: Vec<&str>) -> Self {
        RawText::Strings(value.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<Value>> for RawText {
    fn from(value: Vec<Value>) -> Self {
        RawText::Values(value)
    }
}

impl From<TextArray> for RawText {
    fn from(value: TextArray) -> Self {
        RawText::Array(value)
    }
}

impl From<TextTable> for RawText {
    fn from(value: TextTable) -> Self {
        RawText::Table(value)
    }
}

impl From<TextSeries> for RawText {
    fn from(value: TextSeries) -> Self {
        RawText::Series(value)
    }
}

impl From<Value> for RawText {
    fn from(value: Value) -> Self {
        RawText::Json(value)
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;
    use crate::core::error::RecastError;
    use crate::core::input::{RawText, TextArray, TextColumn, TextSeries, TextTable};

    #[test]
    fn single_string_becomes_one_element(){
        assert_eq!(vec!["hello".to_string()], RawText::from("hello").normalize().unwrap());
    }

    #[test]
    fn sequences_keep_order(){
        let normalized = RawText::from(vec!["a", "b", "c"]).normalize().unwrap();
        assert_eq!(vec!["a", "b", "c"], normalized);
    }

    #[test]
    fn series_drops_label(){
        let series = TextSeries {
            label: Some("tweets".to_string()),
            values: vec![json!("x"), json!("y")]
        };
        assert_eq!(vec!["x", "y"], RawText::from(series).normalize().unwrap());
    }

    #[test]
    fn multi_dimensional_array_is_invalid_shape(){
        let array = TextArray::new(vec![1, 2], vec![json!("a"), json!("b")]);
        match RawText::from(array).normalize() {
            Err(RecastError::InvalidShape(message)) => assert!(message.contains("2 dimensions")),
            other => panic!("unexpected {other:?}")
        }
    }

    #[test]
    fn one_dimensional_array_is_accepted(){
        let array = TextArray::new(vec![2], vec![json!("a"), json!("b")]);
        assert_eq!(vec!["a", "b"], RawText::from(array).normalize().unwrap());
    }

    #[test]
    fn two_column_table_is_invalid_shape(){
        let table = TextTable {
            columns: vec![
                TextColumn { name: "a".to_string(), values: vec![json!("x")] },
                TextColumn { name: "b".to_string(), values: vec![json!("y")] },
            ]
        };
        match RawText::from(table).normalize() {
            Err(RecastError::InvalidShape(message)) => assert!(message.contains("2 columns")),
            other => panic!("unexpected {other:?}")
        }
    }

    #[test]
    fn non_string_element_is_rejected(){
        match RawText::from(vec![json!("a"), json!(5)]).normalize() {
            Err(RecastError::InvalidElementType(message)) => {
                assert!(message.contains("element 1"));
                assert!(message.contains("number"));
            }
            other => panic!("unexpected {other:?}")
        }
    }

    #[test]
    fn json_documents_are_interpreted(){
        assert_eq!(vec!["x"], RawText::from(json!("x")).normalize().unwrap());
        assert_eq!(vec!["x", "y"], RawText::from(json!(["x", "y"])).normalize().unwrap());
        assert_eq!(vec!["x", "y"], RawText::from(json!({"text": ["x", "y"]})).normalize().unwrap());
        assert!(matches!(
            RawText::from(json!([["x"], ["y"]])).normalize(),
            Err(RecastError::InvalidShape(_))
        ));
        assert!(matches!(
            RawText::from(json!(12)).normalize(),
            Err(RecastError::InvalidShape(_))
        ));
    }
}
