use crate::k8s::WorkloadInstance;
use crate::report::grouper::HostGroups;
use crate::report::summary::summarize;
use crate::report::table::Table;
use chrono::{DateTime, Utc};

pub const HEADER: [&str; 5] = ["NAME", "READY", "STATUS", "RESTARTS", "AGE"];

/// Shown in the AGE column for pods the kubelet has not started yet.
const NO_START_TIME: &str = "<none>";

/// AGE is the raw start timestamp, not a relative duration.
pub fn format_age(start_time: Option<&DateTime<Utc>>) -> String {
    match start_time {
        Some(t) => t.to_string(),
        None => NO_START_TIME.to_string(),
    }
}

pub fn instance_row(instance: &WorkloadInstance) -> [String; 5] {
    let summary = summarize(instance);

    [
        instance.name.clone(),
        summary.ready_ratio(),
        instance.phase.to_string(),
        summary.total_restarts.to_string(),
        format_age(instance.start_time.as_ref()),
    ]
}

/// Render one host section: the host line, its aligned table, and a blank line.
pub fn render_host(host: &str, instances: &[WorkloadInstance]) -> String {
    let mut table = Table::new();
    table.push_row(HEADER);
    for instance in instances {
        table.push_row(instance_row(instance));
    }

    let mut out = String::with_capacity(host.len() + 1);
    out.push_str(host);
    out.push('\n');
    out.push_str(&table.render());
    out.push('\n');
    out
}

/// Render every host section in map order. An empty map renders nothing.
pub fn render(groups: &HostGroups) -> String {
    groups
        .iter()
        .map(|(host, instances)| render_host(host, instances))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::k8s::{Phase, SubComponentStatus};
    use crate::report::grouper::group;
    use chrono::TimeZone;

    fn started() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    fn instance(name: &str, host: &str, statuses: Vec<SubComponentStatus>) -> WorkloadInstance {
        WorkloadInstance {
            name: name.to_string(),
            host_name: host.to_string(),
            phase: Phase::Running,
            start_time: Some(started()),
            sub_component_statuses: statuses,
        }
    }

    #[test]
    fn test_format_age_is_raw_timestamp() {
        assert_eq!(format_age(Some(&started())), "2024-01-02 03:04:05 UTC");
        assert_eq!(format_age(None), "<none>");
    }

    #[test]
    fn test_single_pod_report() {
        let groups = group(vec![instance(
            "a",
            "n1",
            vec![
                SubComponentStatus::new(true, 0),
                SubComponentStatus::new(false, 2),
            ],
        )]);

        assert_eq!(
            render(&groups),
            "n1\n\
             NAME READY STATUS  RESTARTS AGE\n\
             a    1/2   Running 2        2024-01-02 03:04:05 UTC\n\
             \n"
        );
    }

    #[test]
    fn test_rows_follow_snapshot_order() {
        let groups = group(vec![
            instance("zeta", "n1", vec![]),
            instance("alpha", "n1", vec![]),
        ]);

        let report = render(&groups);
        let zeta = report.find("zeta").expect("zeta rendered");
        let alpha = report.find("alpha").expect("alpha rendered");
        assert!(zeta < alpha);
    }

    #[test]
    fn test_zero_containers_render_zero_ratio() {
        let row = instance_row(&instance("empty", "n1", vec![]));

        assert_eq!(row[1], "0/0");
        assert_eq!(row[3], "0");
    }

    #[test]
    fn test_unscheduled_pods_get_blank_host_line() {
        let mut pod = instance("pending", "", vec![]);
        pod.phase = Phase::Pending;
        pod.start_time = None;

        let report = render(&group(vec![pod]));

        assert!(report.starts_with("\nNAME "));
        assert!(report.contains("pending 0/0   Pending 0        <none>\n"));
    }

    #[test]
    fn test_host_without_pods_renders_header_only() {
        assert_eq!(
            render_host("n1", &[]),
            "n1\nNAME READY STATUS RESTARTS AGE\n\n"
        );
    }

    #[test]
    fn test_empty_snapshot_renders_nothing() {
        assert_eq!(render(&HostGroups::new()), "");
    }

    #[test]
    fn test_hosts_are_separated_by_blank_lines() {
        let groups = group(vec![instance("a", "n2", vec![]), instance("b", "n1", vec![])]);

        let report = render(&groups);
        let sections: Vec<&str> = report.split("\n\n").filter(|s| !s.is_empty()).collect();

        assert_eq!(sections.len(), 2);
        assert!(sections[0].starts_with("n1\n"));
        assert!(sections[1].starts_with("n2\n"));
    }
}
