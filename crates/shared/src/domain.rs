use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(UserId);
id_newtype!(PostId);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}

/// Directory record as served by `GET /users`. Extra wire fields (username,
/// address, phone) are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub company: Company,
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(rename = "userId")]
    pub user_id: UserId,
    pub title: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_user_record_ignoring_extra_wire_fields() {
        let raw = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {"street": "Kulas Light", "city": "Gwenborough"},
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {"name": "Romaguera-Crona", "catchPhrase": "Multi-layered client-server neural-net"}
        }"#;

        let user: User = serde_json::from_str(raw).expect("user decodes");
        assert_eq!(user.id, UserId(1));
        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.email, "Sincere@april.biz");
        assert_eq!(user.company.name, "Romaguera-Crona");
        assert_eq!(user.website, "hildegard.org");
    }

    #[test]
    fn decodes_post_record_with_camel_case_owner_field() {
        let raw = r#"{"id": 11, "userId": 2, "title": "et ea vero", "body": "delectus"}"#;

        let post: Post = serde_json::from_str(raw).expect("post decodes");
        assert_eq!(post.id, PostId(11));
        assert_eq!(post.user_id, UserId(2));
        assert_eq!(post.title, "et ea vero");
    }
}
