//! Listing table rendering

use chrono::TimeDelta;
use insta::assert_snapshot;

use tether_core::{Row, render_table};
use tether_types::{Bindable, BindingPhase, Object};

use crate::common::{gke_cluster, mysql_claim, now, postgres_claim};

#[test]
fn mixed_kinds_share_one_table() {
    let now = now();

    let mut mysql = mysql_claim();
    mysql.metadata_mut().creation_timestamp = Some(now - TimeDelta::seconds(45));
    mysql.set_binding_phase(BindingPhase::Bound);

    let mut postgres = postgres_claim("reporting", "");
    postgres.metadata_mut().creation_timestamp = Some(now - TimeDelta::hours(3));

    let mut cluster = gke_cluster();
    cluster.metadata_mut().creation_timestamp = Some(now - TimeDelta::days(4));
    cluster.set_binding_phase(BindingPhase::Released);

    let rows = [
        Row::of(&mysql, now),
        Row::of(&postgres, now),
        Row::of(&cluster, now),
    ];

    assert_snapshot!(render_table(&rows), @r"
    NAME        STATUS     CLASS            VERSION   AGE
    app-db      Bound      standard-mysql   5.7       45s
    reporting   Unbound    <none>           <none>    3h
    gke-7d1c    Released   standard-gke     1.11      4d
    ");
}

#[test]
fn missing_timestamp_renders_unknown_age() {
    let row = Row::of(&postgres_claim("pg", "9.6"), now());
    assert_eq!(row.cells()[4], "<unknown>");
    assert_eq!(row.cells()[3], "9.6");
}
