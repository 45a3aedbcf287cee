//! GraphQL documents sent to Linear

pub const CREATE_ISSUE_MUTATION: &str = r#"
mutation CreateIssue($input: IssueCreateInput!) {
    issueCreate(input: $input) {
        success
        issue {
            id
            identifier
            title
            url
            project {
                name
            }
            parent {
                id
                identifier
                title
            }
            state {
                name
            }
        }
    }
}
"#;

pub const CREATE_ISSUES_MUTATION: &str = r#"
mutation CreateIssues($input: IssueBatchCreateInput!) {
    issueBatchCreate(input: $input) {
        success
        issues {
            id
            identifier
            title
            url
            project {
                name
            }
            parent {
                id
                identifier
                title
            }
            state {
                name
            }
        }
    }
}
"#;

pub const UPDATE_ISSUE_MUTATION: &str = r#"
mutation UpdateIssue($id: String!, $input: IssueUpdateInput!) {
    issueUpdate(id: $id, input: $input) {
        success
        issue {
            id
            identifier
            title
            url
            project {
                name
            }
            parent {
                id
                identifier
                title
            }
            state {
                name
            }
        }
    }
}
"#;

pub const UPDATE_ISSUES_MUTATION: &str = r#"
mutation UpdateIssues($ids: [UUID!]!, $input: IssueUpdateInput!) {
    issueBatchUpdate(ids: $ids, input: $input) {
        success
    }
}
"#;

pub const SEARCH_ISSUES_QUERY: &str = r#"
query SearchIssues($filter: IssueFilter, $first: Int, $after: String, $orderBy: PaginationOrderBy) {
    issues(filter: $filter, first: $first, after: $after, orderBy: $orderBy) {
        nodes {
            id
            identifier
            title
            description
            priority
            url
            createdAt
            updatedAt
            state {
                id
                name
            }
            assignee {
                id
                name
            }
            team {
                id
                key
                name
            }
            project {
                id
                name
            }
        }
        pageInfo {
            hasNextPage
            endCursor
        }
    }
}
"#;

pub const DELETE_ISSUE_MUTATION: &str = r#"
mutation DeleteIssue($id: String!) {
    issueDelete(id: $id) {
        success
    }
}
"#;

pub const ADD_COMMENT_MUTATION: &str = r#"
mutation AddComment($input: CommentCreateInput!) {
    commentCreate(input: $input) {
        success
        comment {
            id
            body
            url
            createdAt
            user {
                name
                displayName
            }
        }
    }
}
"#;

pub const GET_COMMENTS_QUERY: &str = r#"
query GetComments($issueId: String!, $first: Int, $after: String) {
    issue(id: $issueId) {
        comments(first: $first, after: $after) {
            nodes {
                id
                body
                url
                createdAt
                user {
                    name
                    displayName
                }
            }
            pageInfo {
                hasNextPage
                endCursor
            }
        }
    }
}
"#;

pub const GET_TEAMS_QUERY: &str = r#"
query GetTeams {
    teams {
        nodes {
            id
            key
            name
            states {
                nodes {
                    id
                    name
                }
            }
        }
    }
}
"#;

/// Build one mutation that deletes every id through an aliased `issueDelete`.
///
/// Aliases are `d0`, `d1`, ... and the matching variables `id0`, `id1`, ...
pub fn batch_delete_mutation(count: usize) -> String {
    let params: Vec<String> = (0..count).map(|i| format!("$id{i}: String!")).collect();
    let fields: Vec<String> = (0..count)
        .map(|i| format!("    d{i}: issueDelete(id: $id{i}) {{\n        success\n    }}"))
        .collect();

    format!(
        "mutation DeleteIssues({}) {{\n{}\n}}",
        params.join(", "),
        fields.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_mutations_select_shared_fields() {
        for doc in [
            CREATE_ISSUE_MUTATION,
            CREATE_ISSUES_MUTATION,
            UPDATE_ISSUE_MUTATION,
        ] {
            assert!(doc.contains("identifier"));
            assert!(doc.contains("parent {"));
            assert_eq!(doc.matches('{').count(), doc.matches('}').count());
        }
    }

    #[test]
    fn test_batch_delete_mutation_aliases() {
        let doc = batch_delete_mutation(2);
        assert!(doc.starts_with("mutation DeleteIssues($id0: String!, $id1: String!)"));
        assert!(doc.contains("d0: issueDelete(id: $id0)"));
        assert!(doc.contains("d1: issueDelete(id: $id1)"));
        assert_eq!(doc.matches('{').count(), doc.matches('}').count());
    }
}
