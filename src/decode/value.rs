use bytes::Bytes;

use super::commons::IDENT_LEN;
use super::utils::{escape_string, gen_blanks};
use super::Style;

/// Owned result of a decode.
///
/// Strings stay raw bytes; a dict keeps its pairs in the order their keys
/// first appear in the buffer, a repeated key keeping only its latest value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BdecodeValue {
    Dict(Vec<(Bytes, BdecodeValue)>),
    List(Vec<BdecodeValue>),
    Str(Bytes),
    Int(i64),
}

impl BdecodeValue {
    pub fn as_int(&self) -> i64 {
        let BdecodeValue::Int(value) = self else {
            panic!("not a Int value")
        };

        *value
    }

    pub fn as_str(&self) -> &[u8] {
        let BdecodeValue::Str(value) = self else {
            panic!("not a Str value")
        };

        value
    }

    /// Item count of a list or dict value.
    pub fn len(&self) -> usize {
        use BdecodeValue::*;

        match self {
            List(items) => items.len(),
            Dict(pairs) => pairs.len(),
            _ => panic!("not a List or Dict value"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn list_item(&self, index: usize) -> &BdecodeValue {
        let BdecodeValue::List(items) = self else {
            panic!("not a List value")
        };

        if index >= items.len() {
            panic!("index out of range");
        }

        &items[index]
    }

    /// Key and value pair at `index`, in buffer order.
    pub fn dict_item(&self, index: usize) -> (&[u8], &BdecodeValue) {
        let BdecodeValue::Dict(pairs) = self else {
            panic!("not a Dict value")
        };

        if index >= pairs.len() {
            panic!("index out of range");
        }

        let (key, value) = &pairs[index];
        (key, value)
    }

    /// Looks up `key` in a dict value.
    pub fn dict_find(&self, key: &[u8]) -> Option<&BdecodeValue> {
        let BdecodeValue::Dict(pairs) = self else {
            panic!("not a Dict value")
        };

        pairs
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v)
    }

    pub fn dict_find_as_str(&self, key: &[u8]) -> Option<&[u8]> {
        match self.dict_find(key) {
            Some(BdecodeValue::Str(value)) => Some(value),
            _ => None,
        }
    }

    pub fn dict_find_as_int(&self, key: &[u8]) -> Option<i64> {
        match self.dict_find(key) {
            Some(BdecodeValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn to_json_with_style(&self, style: Style) -> String {
        match self {
            BdecodeValue::Int(value) => value.to_string(),
            BdecodeValue::Str(bytes) => format!(r#""{}""#, escape_string(bytes)),
            BdecodeValue::List(items) => match style {
                Style::Compact => {
                    let sb = items
                        .iter()
                        .map(|item| item.to_json_with_style(Style::Compact))
                        .collect::<Vec<_>>()
                        .join(", ");

                    format!("[{}]", sb)
                }
                Style::Pretty(ident) => {
                    let pad = gen_blanks(ident + IDENT_LEN);
                    let sb = items
                        .iter()
                        .map(|item| {
                            format!("{}{}", pad, item.to_json_with_style(Style::Pretty(ident + IDENT_LEN)))
                        })
                        .collect::<Vec<_>>()
                        .join(",\n");

                    format!("[\n{}\n{}]", sb, gen_blanks(ident))
                }
            },
            BdecodeValue::Dict(pairs) => match style {
                Style::Compact => {
                    let sb = pairs
                        .iter()
                        .map(|(key, value)| {
                            format!(
                                r#""{}": {}"#,
                                escape_string(key),
                                value.to_json_with_style(Style::Compact)
                            )
                        })
                        .collect::<Vec<_>>()
                        .join(", ");

                    format!("{{ {} }}", sb)
                }
                Style::Pretty(ident) => {
                    let pad = gen_blanks(ident + IDENT_LEN);
                    let sb = pairs
                        .iter()
                        .map(|(key, value)| {
                            format!(
                                r#"{}"{}": {}"#,
                                pad,
                                escape_string(key),
                                value.to_json_with_style(Style::Pretty(ident + IDENT_LEN))
                            )
                        })
                        .collect::<Vec<_>>()
                        .join(",\n");

                    format!("{{\n{}\n{}}}", sb, gen_blanks(ident))
                }
            },
        }
    }

    pub fn to_json(&self) -> String {
        self.to_json_with_style(Style::Compact)
    }

    pub fn to_json_pretty(&self) -> String {
        self.to_json_with_style(Style::Pretty(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_item() {
        // [19, "ab", {"k1": "v1", "k2": [1, 2]} ]
        let buffer = "l i19e 2:ab d 2:k1 2:v1 2:k2 l i1e i2e e e e".replace(" ", "");
        let value = BdecodeValue::parse_buffer(buffer.as_bytes()).unwrap();
        assert_eq!(3, value.len());
        assert_eq!(19, value.list_item(0).as_int());
        assert_eq!(b"ab", value.list_item(1).as_str());

        let value_2 = value.list_item(2);
        assert!(matches!(value_2, BdecodeValue::Dict(_)));
        assert_eq!(2, value_2.len());
    }

    #[test]
    fn test_dict_item() {
        // [19, "ab", {"k1": "v1", "k2": [1, 2]} ]
        let buffer = "l i19e 2:ab d 2:k1 2:v1 2:k2 l i1e i2e e e e".replace(" ", "");
        let value = BdecodeValue::parse_buffer(buffer.as_bytes()).unwrap();

        let value_2 = value.list_item(2);

        let (key, val) = value_2.dict_item(0);
        assert_eq!(b"k1", key);
        assert_eq!(b"v1", val.as_str());

        let (key, val) = value_2.dict_item(1);
        assert_eq!(b"k2", key);
        assert_eq!(2, val.len());
        assert_eq!(1, val.list_item(0).as_int());
        assert_eq!(2, val.list_item(1).as_int());
    }

    #[test]
    fn test_dict_find() {
        // {"k1": "v1", "k2": [1, 2], "k03": 3, "k4": {"k5": 5}}
        let buffer = "d 2:k1 2:v1 2:k2 l i1e i2e e 3:k03 i3e 2:k4 d 2:k5 i5e e e".replace(" ", "");
        let value = BdecodeValue::parse_buffer(buffer.as_bytes()).unwrap();
        assert_eq!(4, value.len());

        let val_1 = value.dict_find(b"k1").unwrap();
        assert_eq!(b"v1", val_1.as_str());

        let val_3 = value.dict_find(b"k03").unwrap();
        assert_eq!(3, val_3.as_int());

        let val_2 = value.dict_find(b"k2").unwrap();
        assert!(matches!(val_2, BdecodeValue::List(_)));
        assert_eq!(2, val_2.len());

        assert_eq!(b"v1", value.dict_find_as_str(b"k1").unwrap());
        assert_eq!(3, value.dict_find_as_int(b"k03").unwrap());
        assert_eq!(None, value.dict_find_as_int(b"k1"));
        assert_eq!(None, value.dict_find_as_str(b"k9"));

        let val_5 = value.dict_find(b"k4").unwrap().dict_find_as_int(b"k5");
        assert_eq!(5, val_5.unwrap());
    }

    #[test]
    fn test_dict_insertion_order() {
        // wire order is not lexicographic and must be kept as is
        let buffer = "d 4:spam 4:eggs 3:cow 3:moo e".replace(" ", "");
        let value = BdecodeValue::parse_buffer(buffer.as_bytes()).unwrap();

        let (key, _) = value.dict_item(0);
        assert_eq!(b"spam", key);
        let (key, _) = value.dict_item(1);
        assert_eq!(b"cow", key);
    }

    #[test]
    fn test_dict_duplicate_keys() {
        let buffer = "d 1:a 1:b 1:z 1:y 1:a 1:c e".replace(" ", "");
        let value = BdecodeValue::parse_buffer(buffer.as_bytes()).unwrap();

        // the latest value wins and the first occurrence keeps its position
        assert_eq!(2, value.len());
        assert_eq!(b"c", value.dict_find_as_str(b"a").unwrap());
        assert_eq!(b"a", value.dict_item(0).0);
        assert_eq!(b"z", value.dict_item(1).0);
    }

    #[test]
    #[should_panic(expected = "index out of range")]
    fn test_panic_list_item() {
        // [19, "ab", "cd", "ef"]
        let buffer = "l i19e 2:ab 2:cd 2:ef e".replace(" ", "");
        let value = BdecodeValue::parse_buffer(buffer.as_bytes()).unwrap();
        let _ = value.list_item(4);
    }

    #[test]
    #[should_panic(expected = "not a Dict value")]
    fn test_panic_dict_find() {
        let value = BdecodeValue::parse_buffer(b"i19e").unwrap();
        let _ = value.dict_find(b"k1");
    }

    #[test]
    fn test_to_json() {
        // {"k1": "v1", "k2": [1, 2], "k3": "a b"}
        let buffer = b"d2:k12:v12:k2li1ei2ee2:k33:a be";
        let value = BdecodeValue::parse_buffer(buffer).unwrap();
        assert_eq!(
            r#"{ "k1": "v1", "k2": [1, 2], "k3": "a b" }"#,
            value.to_json()
        );
    }

    #[test]
    fn test_to_json_escaped() {
        let value = BdecodeValue::parse_buffer(b"2:\x04b").unwrap();
        assert_eq!(r#""\x04b""#, value.to_json());
    }

    #[test]
    fn test_to_json_pretty() {
        // {"k1": [7, 8], "k2": "v2"}
        let buffer = "d 2:k1 l i7e i8e e 2:k2 2:v2 e".replace(" ", "");
        let value = BdecodeValue::parse_buffer(buffer.as_bytes()).unwrap();

        let expected = "\
{
    \"k1\": [
        7,
        8
    ],
    \"k2\": \"v2\"
}";
        assert_eq!(expected, value.to_json_pretty());
    }
}
