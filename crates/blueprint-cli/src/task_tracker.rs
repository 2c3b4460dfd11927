//! Architecture views of the Task Tracker system.
//!
//! Three diagrams in the C4 style: the system context, the container view and
//! the development deployment on Docker. Each function builds its diagram from
//! scratch; nothing is shared between them.

use blueprint::{
    DiagramError,
    builder::DiagramBuilder,
    semantic::{ArrowDirection, Diagram, Direction, Label, Node, NodeCategory},
};

/// People and external systems around the Task Tracker.
pub fn system_context() -> Result<Diagram, DiagramError> {
    let mut builder = DiagramBuilder::new("Task Tracker System – System Context")
        .with_filename("task_tracker_system_context")
        .with_direction(Direction::LeftToRight);

    let user = builder.node(Node::new("user", NodeCategory::Person, "User"))?;
    let admin = builder.node(Node::new("admin", NodeCategory::Person, "Administrator"))?;
    let system = builder.node(Node::new(
        "task_tracker",
        NodeCategory::Server,
        Label::new("Task-Tracker System").with_kind("Software System"),
    ))?;
    let email = builder.node(Node::new(
        "email_service",
        NodeCategory::External,
        Label::new("Email Service").with_kind("External"),
    ))?;

    builder.connect(user, system)?;
    builder.connect(admin, system)?;
    builder.connect(system, email)?;

    builder.build()
}

/// Deployable units of the Task Tracker and how data flows between them.
pub fn containers() -> Result<Diagram, DiagramError> {
    let mut builder = DiagramBuilder::new("Task Tracker System – Containers")
        .with_filename("task_tracker_system_containers")
        .with_direction(Direction::TopToBottom);

    let user = builder.node(Node::new("user", NodeCategory::Person, "User"))?;
    let admin = builder.node(Node::new("admin", NodeCategory::Person, "Administrator"))?;

    let system = Label::new("Task-Tracker System").with_detail("(taskTrackerSystem)");
    let worker = builder.cluster(system, |b| {
        let frontend = b.node(Node::new(
            "frontend",
            NodeCategory::Server,
            container("Frontend Application", "React, TypeScript"),
        ))?;
        let api = b.node(Node::new(
            "backend_api",
            NodeCategory::Server,
            container("Backend API", "ASP.NET Core"),
        ))?;
        let worker = b.node(Node::new(
            "worker_service",
            NodeCategory::Server,
            container("Worker Service", ".NET Worker"),
        ))?;
        let database = b.node(Node::new(
            "database",
            NodeCategory::Datastore,
            container("Database", "PostgreSQL"),
        ))?;
        let queue = b.node(Node::new(
            "message_queue",
            NodeCategory::Queue,
            container("Message Queue", "RabbitMQ"),
        ))?;

        b.connect(user, frontend)?;
        b.connect(admin, frontend)?;
        b.connect(frontend, api)?;
        b.connect(api, database)?;
        b.connect(api, queue)?;
        b.connect(worker, database)?;
        // The worker consumes from the queue.
        b.declare(worker, ArrowDirection::Backward, queue)?;

        Ok(worker)
    })?;

    let email = builder.node(Node::new(
        "email_service",
        NodeCategory::External,
        Label::new("Email Service").with_kind("External"),
    ))?;
    builder.connect(worker, email)?;

    builder.build()
}

/// Development deployment: a browser on the user's machine talking to a
/// single Docker host.
pub fn deployment() -> Result<Diagram, DiagramError> {
    let mut builder = DiagramBuilder::new("Task Tracker System – Deployment (Dev)")
        .with_filename("task_tracker_system_deployment")
        .with_direction(Direction::LeftToRight);

    let browser = builder.cluster(deployment_node("User's Machine"), |b| {
        b.node(Node::new(
            "web_browser",
            NodeCategory::Person,
            Label::new("Web Browser").with_detail("(hosts Frontend Application)"),
        ))
    })?;

    let (api, worker, database, queue) = builder.cluster(deployment_node("Docker Host"), |b| {
        let api = b.node(Node::new(
            "backend_api",
            NodeCategory::Server,
            docker_container("Backend API", "tasktracker-api"),
        ))?;
        let worker = b.node(Node::new(
            "worker_service",
            NodeCategory::Server,
            docker_container("Worker Service", "tasktracker-worker"),
        ))?;
        let database = b.node(Node::new(
            "database",
            NodeCategory::Datastore,
            docker_container("Database", "postgres"),
        ))?;
        let queue = b.node(Node::new(
            "message_queue",
            NodeCategory::Queue,
            docker_container("Message Queue", "rabbitmq"),
        ))?;
        Ok((api, worker, database, queue))
    })?;

    let email = builder.node(Node::new(
        "email_service",
        NodeCategory::External,
        Label::new("Email Service").with_kind("External System"),
    ))?;

    builder.connect(browser, api)?;
    builder.connect(api, database)?;
    builder.connect(api, queue)?;
    builder.connect(worker, database)?;
    builder.connect(worker, queue)?;
    builder.connect(worker, email)?;

    builder.build()
}

/// Builders for every view, in rendering order.
pub fn views() -> [fn() -> Result<Diagram, DiagramError>; 3] {
    [system_context, containers, deployment]
}

fn container(name: &str, technology: &str) -> Label {
    Label::new(name).with_kind("Container").with_detail(technology)
}

fn docker_container(name: &str, image: &str) -> Label {
    Label::new(name)
        .with_kind("Docker Container")
        .with_detail(image)
}

fn deployment_node(name: &str) -> Label {
    Label::new(name).with_kind("Deployment Node")
}
