mod helpers;

use nashikweb_contact::{Command, ContactInquiryInput, Error, ServiceKind, store::MemoryStore};

#[tokio::test]
async fn submit_stores_a_valid_inquiry() -> anyhow::Result<()> {
    let cmd = Command::new(MemoryStore::new());

    let inquiry = cmd
        .submit(helpers::input("Rahul Deshmukh", "Website Development"))
        .await?;

    assert_eq!(inquiry.name, "Rahul Deshmukh");
    assert_eq!(inquiry.email, "rahul.deshmukh@example.com");
    assert_eq!(inquiry.service, ServiceKind::WebsiteDevelopment);
    assert_eq!(inquiry.id.len(), 36);
    assert!(inquiry.created_at > 0);

    let found = cmd.find(&inquiry.id).await?;
    assert_eq!(found, Some(inquiry));

    Ok(())
}

#[tokio::test]
async fn invalid_inquiry_is_not_stored() -> anyhow::Result<()> {
    let cmd = Command::new(MemoryStore::new());

    let err = cmd
        .submit(ContactInquiryInput {
            email: "nope".to_owned(),
            ..helpers::input("Rahul", "Other")
        })
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert!(cmd.list(10).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn list_returns_most_recent_first() -> anyhow::Result<()> {
    let cmd = Command::new(MemoryStore::new());

    for name in ["Anita", "Bhavesh", "Chetan"] {
        cmd.submit(helpers::input(name, "CRM Systems")).await?;
    }

    let names: Vec<_> = cmd.list(2).await?.into_iter().map(|i| i.name).collect();
    assert_eq!(names, ["Chetan", "Bhavesh"]);
    assert_eq!(cmd.backend(), "memory");

    Ok(())
}
