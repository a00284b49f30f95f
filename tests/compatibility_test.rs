use graal::prelude::*;

// Simulate an external struct-of-arrays table (like a columnar batch)
struct MockTable {
    ids: Vec<u32>,
    names: Vec<&'static str>,
}

// Row-wise view over the table; swapping a row swaps every column.
struct Row<'a> {
    id: &'a u32,
    name: &'a str,
}

impl MockTable {
    fn row(&self, index: usize) -> Row<'_> {
        Row {
            id: &self.ids[index],
            name: self.names[index],
        }
    }
}

// Implement the accessor traits for the external struct.
// This proves the traits are implementable by "outside crates".
impl RangeAccessor for MockTable {
    type Element = u32;

    fn element(&self, index: usize) -> &u32 {
        &self.ids[index]
    }

    fn len(&self) -> usize {
        self.ids.len()
    }
}

impl RangeAccessorMut for MockTable {
    fn swap(&mut self, a: usize, b: usize) {
        self.ids.swap(a, b);
        self.names.swap(a, b);
    }
}

#[test]
fn test_external_struct_compatibility() {
    let mut table = MockTable {
        ids: vec![30, 10, 20],
        names: vec!["baz", "foo", "bar"],
    };

    assert_eq!(min(&table, |a, b| a < b), Some(1));

    sort(&mut table, |a, b| a < b);
    assert_eq!(table.ids, vec![10, 20, 30]);
    assert_eq!(table.names, vec!["foo", "bar", "baz"]);

    let row = table.row(2);
    assert_eq!((*row.id, row.name), (30, "baz"));
}

#[test]
fn test_external_struct_partition_keeps_rows_together() {
    let mut table = MockTable {
        ids: vec![1, 2, 3, 5, 1, 4],
        names: vec!["a", "b", "c", "d", "e", "f"],
    };

    let point = partition(&mut table, |&id| id > 1);
    assert_eq!(point, 4);
    for index in 0..table.len() {
        let row = table.row(index);
        let expected = match *row.id {
            1 => ["a", "e"].contains(&row.name),
            2 => row.name == "b",
            3 => row.name == "c",
            5 => row.name == "d",
            4 => row.name == "f",
            _ => false,
        };
        assert!(expected, "row {} lost its name", index);
    }
}
