//! The broker section.
use tracing::trace;

use crate::{
    metadata::MetadataBroker,
    sort::sort_brokers,
    table::{Column, Table},
};

/// Suffix marking the controller broker's ID.
pub const CONTROLLER_MARKER: char = '*';

/// Render the broker roster, ordered by node ID.
///
/// Sorts `brokers` in place. The controller is suffixed with [`CONTROLLER_MARKER`]. A `RACK`
/// column is added if any broker reports a rack.
pub fn render_brokers(brokers: &mut [MetadataBroker], controller_id: Option<i32>) -> String {
    sort_brokers(brokers);

    let mut table = Table::new();
    table.push(Column::new("id", move |b: &MetadataBroker| {
        if Some(b.node_id) == controller_id {
            format!("{}{CONTROLLER_MARKER}", b.node_id)
        } else {
            b.node_id.to_string()
        }
    }));
    table.push(Column::new("host", |b: &MetadataBroker| b.host.clone()));
    table.push(Column::new("port", |b: &MetadataBroker| b.port.to_string()));

    if brokers.iter().any(|b| b.rack.is_some()) {
        table.push(Column::new("rack", |b: &MetadataBroker| {
            b.rack.clone().unwrap_or_default()
        }));
    }
    trace!(columns=?table.headers(), "broker columns");

    table.render(brokers.iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    fn broker(node_id: i32, rack: Option<&str>) -> MetadataBroker {
        MetadataBroker {
            node_id,
            host: format!("broker-{node_id}.local"),
            port: 9092,
            rack: rack.map(ToOwned::to_owned),
        }
    }

    /// Data rows, split into whitespace separated cells.
    fn rows(out: &str) -> Vec<Vec<&str>> {
        out.lines()
            .skip(1)
            .map(|l| l.split_whitespace().collect())
            .collect()
    }

    #[test]
    fn test_without_rack() {
        let mut brokers = vec![broker(2, None), broker(0, None), broker(1, None)];
        let out = render_brokers(&mut brokers, Some(1));

        let header: Vec<_> = out.lines().next().unwrap().split_whitespace().collect();
        assert_eq!(header, vec!["ID", "HOST", "PORT"]);
        assert_eq!(
            rows(&out),
            vec![
                vec!["0", "broker-0.local", "9092"],
                vec!["1*", "broker-1.local", "9092"],
                vec!["2", "broker-2.local", "9092"],
            ]
        );
    }

    #[test]
    fn test_rack_column_with_missing_rack() {
        let mut brokers = vec![broker(1, Some("rack-a")), broker(2, None)];
        let out = render_brokers(&mut brokers, None);

        let header: Vec<_> = out.lines().next().unwrap().split_whitespace().collect();
        assert_eq!(header, vec!["ID", "HOST", "PORT", "RACK"]);
        assert_eq!(
            rows(&out),
            vec![
                vec!["1", "broker-1.local", "9092", "rack-a"],
                vec!["2", "broker-2.local", "9092"],
            ]
        );
    }

    #[test]
    fn test_no_brokers() {
        let out = render_brokers(&mut [], Some(0));
        assert_eq!(out.lines().count(), 1);
    }

    proptest! {
        #[test]
        fn test_order_and_marker(
            ids in proptest::collection::hash_set(0..1000_i32, 1..20),
            pick in any::<prop::sample::Index>(),
        ) {
            let mut brokers: Vec<_> = ids.into_iter().map(|id| broker(id, None)).collect();
            let controller = brokers[pick.index(brokers.len())].node_id;

            let out = render_brokers(&mut brokers, Some(controller));
            let rows = rows(&out);

            let mut last = None;
            let mut marked = vec![];
            for row in &rows {
                let id: i32 = row[0].trim_end_matches(CONTROLLER_MARKER).parse().unwrap();
                prop_assert!(last.is_none_or(|last| last < id));
                last = Some(id);
                if row[0].ends_with(CONTROLLER_MARKER) {
                    marked.push(id);
                }
            }
            prop_assert_eq!(marked, vec![controller]);
        }
    }
}
