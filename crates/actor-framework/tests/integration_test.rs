use actor_framework::{ids, ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: String,
    title: String,
    open: bool,
}

#[derive(Debug)]
struct TicketUpdate {
    title: String,
    open: bool,
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum TicketError {
    #[error("Ticket must include a title")]
    MissingTitle,
    #[error("An open ticket cannot be deleted")]
    StillOpen,
}

#[async_trait]
impl ActorEntity for Ticket {
    type Id = String;
    type Create = String;
    type Update = TicketUpdate;
    type Context = ();
    type Error = TicketError;

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create_params(id: String, title: String) -> Result<Self, TicketError> {
        if title.is_empty() {
            return Err(TicketError::MissingTitle);
        }
        Ok(Self {
            id,
            title,
            open: true,
        })
    }

    async fn on_update(&mut self, update: TicketUpdate, _ctx: &()) -> Result<(), TicketError> {
        if update.title.is_empty() {
            return Err(TicketError::MissingTitle);
        }
        self.title = update.title;
        self.open = update.open;
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), TicketError> {
        if self.open {
            return Err(TicketError::StillOpen);
        }
        Ok(())
    }
}

fn ticket(id: &str, title: &str, open: bool) -> Ticket {
    Ticket {
        id: id.to_string(),
        title: title.to_string(),
        open,
    }
}

#[tokio::test]
async fn test_list_preserves_creation_order() {
    let (actor, client) = ResourceActor::<Ticket>::new(10, ids::sequential("ticket"));
    tokio::spawn(actor.run(()));

    for title in ["first", "second", "third"] {
        client.create(title.to_string()).await.unwrap();
    }

    let titles: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn test_create_returns_record_with_generated_id() {
    let (actor, client) = ResourceActor::<Ticket>::new(10, ids::sequential("ticket"));
    tokio::spawn(actor.run(()));

    let created = client.create("login broken".to_string()).await.unwrap();
    assert_eq!(created, ticket("ticket_1", "login broken", true));

    let fetched = client.get("ticket_1".to_string()).await.unwrap();
    assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn test_entity_error_is_returned_typed() {
    let (actor, client) = ResourceActor::<Ticket>::new(10, ids::sequential("ticket"));
    tokio::spawn(actor.run(()));

    let result = client.create(String::new()).await;
    assert!(matches!(
        result,
        Err(FrameworkError::Entity(TicketError::MissingTitle))
    ));
    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_record_is_not_found_before_hooks_run() {
    let (actor, client) = ResourceActor::<Ticket>::new(10, ids::sequential("ticket"));
    tokio::spawn(actor.run(()));

    // The update payload is invalid too, but existence is checked first.
    let update = TicketUpdate {
        title: String::new(),
        open: false,
    };
    let result = client.update("ticket_42".to_string(), update).await;
    assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "ticket_42"));

    let result = client.delete("ticket_42".to_string()).await;
    assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "ticket_42"));

    assert_eq!(client.get("ticket_42".to_string()).await.unwrap(), None);
}

#[tokio::test]
async fn test_rejected_update_leaves_record_unchanged() {
    let (actor, client) = ResourceActor::<Ticket>::new(10, ids::sequential("ticket"));
    tokio::spawn(actor.run(()));

    let created = client.create("typo".to_string()).await.unwrap();
    let update = TicketUpdate {
        title: String::new(),
        open: false,
    };
    let result = client.update(created.id.clone(), update).await;
    assert!(matches!(
        result,
        Err(FrameworkError::Entity(TicketError::MissingTitle))
    ));

    let fetched = client.get(created.id.clone()).await.unwrap();
    assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn test_on_delete_can_veto_removal() {
    let (actor, client) = ResourceActor::<Ticket>::new(10, ids::sequential("ticket"));
    tokio::spawn(actor.run(()));

    let created = client.create("crash on save".to_string()).await.unwrap();
    let result = client.delete(created.id.clone()).await;
    assert!(matches!(
        result,
        Err(FrameworkError::Entity(TicketError::StillOpen))
    ));
    assert_eq!(client.list().await.unwrap().len(), 1);

    let closed = TicketUpdate {
        title: "crash on save".to_string(),
        open: false,
    };
    client.update(created.id.clone(), closed).await.unwrap();
    client.delete(created.id.clone()).await.unwrap();
    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_seeded_records_are_served_in_order() {
    let (actor, client) = ResourceActor::<Ticket>::new(10, ids::sequential("ticket"));
    let actor = actor.with_records(vec![
        ticket("seed_b", "b", false),
        ticket("seed_a", "a", true),
    ]);
    tokio::spawn(actor.run(()));

    let all = client.list().await.unwrap();
    assert_eq!(all[0].id, "seed_b");
    assert_eq!(all[1].id, "seed_a");

    let created = client.create("c".to_string()).await.unwrap();
    assert_eq!(created.id, "ticket_1");
    assert_eq!(client.list().await.unwrap()[2], created);
}

#[tokio::test]
async fn test_actor_stops_when_clients_dropped() {
    let (actor, client) = ResourceActor::<Ticket>::new(10, ids::sequential("ticket"));
    let handle = tokio::spawn(actor.run(()));

    let other = client.clone();
    client.create("one".to_string()).await.unwrap();
    drop(client);
    other.create("two".to_string()).await.unwrap();
    drop(other);

    handle.await.expect("actor task should finish cleanly");
}
