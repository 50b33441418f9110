// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for ecs-event-details
//!
//! Envelope documents live under `tests/testdata/` and are compiled in with
//! `include_str!`. The functions below build the records each document is
//! expected to decode to, field by field.
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use tracing_subscriber::EnvFilter;

use ecs_event_details::events::*;
use ecs_event_details::Envelope;

pub const TASK_STATE_CHANGE_JSON: &str = include_str!("../testdata/task_state_change.json");
pub const TASK_STATE_CHANGE_STOPPED_JSON: &str =
    include_str!("../testdata/task_state_change_stopped.json");
pub const CONTAINER_INSTANCE_STATE_CHANGE_JSON: &str =
    include_str!("../testdata/container_instance_state_change.json");
pub const DEPLOYMENT_STATE_CHANGE_JSON: &str =
    include_str!("../testdata/deployment_state_change.json");
pub const UNKNOWN_DETAIL_TYPE_JSON: &str = include_str!("../testdata/unknown_detail_type.json");

const FARGATE_TASK_ARN: &str =
    "arn:aws:ecs:us-west-2:111122223333:task/FargateCluster/c13b4cb40f1f4fe4a2971f76ae5a47ad";
const FARGATE_ATTACHMENT_ID: &str = "1789bcae-ddfb-4d10-8ebe-8ac87ddba5b8";
const WORKER_TASK_ARN: &str =
    "arn:aws:ecs:eu-west-1:111122223333:task/default/0a9f1c2d3e4b5a6978877665544332211";

/// Install a test-writer subscriber; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Parse a fixture envelope document
pub fn envelope(json: &str) -> Envelope {
    Envelope::from_slice(json.as_bytes()).expect("Invalid envelope in test fixture")
}

/// Parse a fixed RFC 3339 timestamp
pub fn timestamp(repr: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(repr)
        .expect("Invalid timestamp in test fixture")
        .with_timezone(&Utc)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn attachment_detail(name: &str, value: &str) -> TaskAttachmentDetail {
    TaskAttachmentDetail {
        name: name.to_string(),
        value: value.to_string(),
    }
}

/// Fargate task reaching RUNNING
pub fn task_state_change_fixture() -> TaskStateChange {
    TaskStateChange {
        attachments: vec![TaskAttachment {
            id: FARGATE_ATTACHMENT_ID.to_string(),
            kind: "eni".to_string(),
            status: "ATTACHED".to_string(),
            details: vec![
                attachment_detail("subnetId", "subnet-abcd1234"),
                attachment_detail("networkInterfaceId", "eni-abcd1234"),
                attachment_detail("macAddress", "0a:98:eb:a7:29:ba"),
                attachment_detail("privateIPv4Address", "10.0.0.139"),
            ],
        }],
        availability_zone: "us-west-2c".to_string(),
        cluster_arn: "arn:aws:ecs:us-west-2:111122223333:cluster/FargateCluster".to_string(),
        containers: vec![Container {
            container_arn: "arn:aws:ecs:us-west-2:111122223333:container/cf159fd6-3e3f-4a9e-84f9-66cbe726af01".to_string(),
            last_status: "RUNNING".to_string(),
            name: "FargateApp".to_string(),
            image: "111122223333.dkr.ecr.us-west-2.amazonaws.com/hello-repository:latest"
                .to_string(),
            image_digest: "sha256:74b2c688c700ec95a93e478cdb959737c148df3fbf5ea706abe0318726e885e6"
                .to_string(),
            runtime_id: "ad64cbc71c7fb31c55507ec24c9f77947132b03d48d9961115cf24f3b7307e1e"
                .to_string(),
            task_arn: FARGATE_TASK_ARN.to_string(),
            network_interfaces: vec![NetworkInterface {
                attachment_id: FARGATE_ATTACHMENT_ID.to_string(),
                private_ipv4_address: "10.0.0.139".to_string(),
                ipv6_address: String::new(),
            }],
            cpu: "0".to_string(),
            ..Default::default()
        }],
        created_at: timestamp("2020-01-23T17:57:34.402Z"),
        launch_type: "FARGATE".to_string(),
        cpu: "256".to_string(),
        memory: "512".to_string(),
        desired_status: "RUNNING".to_string(),
        group: "family:sample-fargate".to_string(),
        last_status: "RUNNING".to_string(),
        connectivity: "CONNECTED".to_string(),
        connectivity_at: timestamp("2020-01-23T17:57:38.453Z"),
        pull_started_at: timestamp("2020-01-23T17:57:52.103Z"),
        started_at: timestamp("2020-01-23T17:57:58.103Z"),
        pull_stopped_at: timestamp("2020-01-23T17:57:55.103Z"),
        updated_at: timestamp("2020-01-23T17:57:58.103Z"),
        task_arn: FARGATE_TASK_ARN.to_string(),
        task_definition_arn: "arn:aws:ecs:us-west-2:111122223333:task-definition/sample-fargate:1"
            .to_string(),
        version: 4,
        platform_version: "1.3.0".to_string(),
        ..Default::default()
    }
}

/// EC2 task stopped after its essential container ran out of memory
pub fn task_state_change_stopped_fixture() -> TaskStateChange {
    let container = |id: &str, name: &str| Container {
        container_arn: format!(
            "arn:aws:ecs:eu-west-1:111122223333:container/default/0a9f1c2d3e4b5a6978877665544332211/{}",
            id
        ),
        last_status: "STOPPED".to_string(),
        name: name.to_string(),
        task_arn: WORKER_TASK_ARN.to_string(),
        ..Default::default()
    };

    TaskStateChange {
        cluster_arn: "arn:aws:ecs:eu-west-1:111122223333:cluster/default".to_string(),
        containers: vec![
            Container {
                exit_code: 137,
                reason: "OutOfMemoryError: Container killed due to memory usage".to_string(),
                ..container("5e0c8f4a-1d2b-4c3e-9f8a-7b6c5d4e3f2a", "worker")
            },
            container("7d1e2f3a-4b5c-4d6e-8f9a-0b1c2d3e4f5a", "sidecar"),
        ],
        created_at: timestamp("2021-03-11T09:01:40.117Z"),
        launch_type: "EC2".to_string(),
        desired_status: "STOPPED".to_string(),
        group: "service:worker".to_string(),
        last_status: "STOPPED".to_string(),
        started_at: timestamp("2021-03-11T09:01:52.64Z"),
        started_by: "ecs-svc/4421394837812000000".to_string(),
        stopping_at: timestamp("2021-03-11T09:13:58.301Z"),
        stopped_at: timestamp("2021-03-11T09:14:01.925Z"),
        execution_stopped_at: timestamp("2021-03-11T09:14:00.5Z"),
        stopped_reason: "Essential container in task exited".to_string(),
        stop_code: "EssentialContainerExited".to_string(),
        updated_at: timestamp("2021-03-11T09:14:01.925Z"),
        task_arn: WORKER_TASK_ARN.to_string(),
        task_definition_arn: "arn:aws:ecs:eu-west-1:111122223333:task-definition/worker:12"
            .to_string(),
        version: 6,
        ..Default::default()
    }
}

fn integer_resource(name: &str, value: i64) -> Resource {
    Resource {
        name: name.to_string(),
        kind: "INTEGER".to_string(),
        integer_value: value,
        ..Default::default()
    }
}

fn string_set_resource(name: &str, values: &[&str]) -> Resource {
    Resource {
        name: name.to_string(),
        kind: "STRINGSET".to_string(),
        string_set_value: strings(values),
        ..Default::default()
    }
}

/// EC2 container instance after a task was placed on it
pub fn container_instance_state_change_fixture() -> ContainerInstanceStateChange {
    let ports = ["22", "2376", "2375", "51678", "51679"];

    ContainerInstanceStateChange {
        agent_connected: true,
        attributes: vec![
            ContainerInstanceAttribute {
                name: "com.amazonaws.ecs.capability.logging-driver.syslog".to_string(),
                value: String::new(),
            },
            ContainerInstanceAttribute {
                name: "com.amazonaws.ecs.capability.task-iam-role-network-host".to_string(),
                value: String::new(),
            },
            ContainerInstanceAttribute {
                name: "ecs.os-type".to_string(),
                value: "linux".to_string(),
            },
        ],
        cluster_arn: "arn:aws:ecs:us-east-1:111122223333:cluster/default".to_string(),
        container_instance_arn: "arn:aws:ecs:us-east-1:111122223333:container-instance/b54a2a04-046f-4331-9d74-3f6d7f6ca315".to_string(),
        ec2_instance_id: "i-f3a8506b".to_string(),
        status: "ACTIVE".to_string(),
        registered_resources: vec![
            integer_resource("CPU", 2048),
            integer_resource("MEMORY", 3767),
            string_set_resource("PORTS", &ports),
            string_set_resource("PORTS_UDP", &[]),
        ],
        remaining_resources: vec![
            integer_resource("CPU", 1988),
            integer_resource("MEMORY", 767),
            string_set_resource("PORTS", &ports),
            string_set_resource("PORTS_UDP", &[]),
        ],
        version: 14801,
        version_info: AgentVersionInfo {
            agent_hash: "aebcbca".to_string(),
            agent_version: "1.13.0".to_string(),
            docker_version: "DockerVersion: 1.11.2".to_string(),
        },
        updated_at: timestamp("2016-12-06T16:41:06.991Z"),
    }
}

/// Deployment rolled back by the circuit breaker
pub fn deployment_state_change_fixture() -> DeploymentStateChange {
    DeploymentStateChange {
        event_type: "ERROR".to_string(),
        event_name: "SERVICE_DEPLOYMENT_FAILED".to_string(),
        deployment_id: "ecs-svc/123".to_string(),
        updated_at: timestamp("2020-05-23T11:11:11Z"),
        reason: "ECS deployment circuit breaker: task failed to start.".to_string(),
    }
}
