use crate::meta::{KernelInfo, UserDetails};
use crate::panel::{MetaItem, MetaList};

const LIMIT: u32 = 25;

/// Backtick-quote a name for use in Cypher, doubling embedded backticks.
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

pub fn label_items(labels: &[String]) -> MetaList {
    let mut items = vec![MetaItem::command(
        "*",
        format!("MATCH (n) RETURN n LIMIT {}", LIMIT),
    )];
    items.extend(labels.iter().map(|label| {
        MetaItem::command(
            label.clone(),
            format!("MATCH (n:{}) RETURN n LIMIT {}", quote_identifier(label), LIMIT),
        )
    }));
    MetaList::new("Node labels", items, labels.is_empty(), "No labels in database")
}

pub fn relationship_items(relationship_types: &[String]) -> MetaList {
    let mut items = vec![MetaItem::command(
        "*",
        format!("MATCH p=()-->() RETURN p LIMIT {}", LIMIT),
    )];
    items.extend(relationship_types.iter().map(|rel| {
        MetaItem::command(
            rel.clone(),
            format!(
                "MATCH p=()-[r:{}]->() RETURN p LIMIT {}",
                quote_identifier(rel),
                LIMIT
            ),
        )
    }));
    MetaList::new(
        "Relationship types",
        items,
        relationship_types.is_empty(),
        "No relationships in database",
    )
}

pub fn property_items(properties: &[String]) -> MetaList {
    let items = properties
        .iter()
        .map(|prop| {
            let key = quote_identifier(prop);
            MetaItem::command(
                prop.clone(),
                format!(
                    "MATCH (n) WHERE exists(n.{key}) RETURN DISTINCT \"node\" as element, n.{key} AS {key} LIMIT {limit} \
                     UNION ALL \
                     MATCH ()-[r]-() WHERE exists(r.{key}) RETURN DISTINCT \"relationship\" AS element, r.{key} AS {key} LIMIT {limit}",
                    key = key,
                    limit = LIMIT
                ),
            )
        })
        .collect();
    MetaList::new(
        "Property keys",
        items,
        properties.is_empty(),
        "No properties in database",
    )
}

pub fn user_detail_items(user_details: Option<&UserDetails>) -> MetaList {
    let Some(user) = user_details.filter(|u| u.username.is_some()) else {
        return MetaList::new("Connected as", Vec::new(), true, "Not connected");
    };

    let roles = if user.roles.is_empty() {
        "-".to_string()
    } else {
        user.roles.join(", ")
    };
    let mut items = vec![
        MetaItem::info(format!("Username: {}", user.username.as_deref().unwrap_or("-"))),
        MetaItem::info(format!("Roles: {}", roles)),
    ];
    if user.is_admin() {
        items.push(MetaItem::command("Admin: list users", ":server user list"));
        items.push(MetaItem::command("Admin: add user", ":server user add"));
    }
    MetaList::new("Connected as", items, false, "")
}

pub fn kernel_info_items(kernel_info: Option<&KernelInfo>) -> MetaList {
    let Some(info) = kernel_info else {
        return MetaList::new("DBMS", Vec::new(), true, "No database information");
    };

    let field = |name: &str, value: &Option<String>| {
        MetaItem::info(format!("{}: {}", name, value.as_deref().unwrap_or("-")))
    };
    let items = vec![
        field("Version", &info.version),
        field("Edition", &info.edition),
        field("Name", &info.db_name),
        MetaItem::command("Information: :sysinfo", ":sysinfo"),
        MetaItem::command("Query List: :queries", ":queries"),
        MetaItem::command("Clear Session: :clear", ":clear"),
    ];
    MetaList::new("DBMS", items, false, "")
}
