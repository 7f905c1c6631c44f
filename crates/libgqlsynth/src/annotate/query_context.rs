use crate::ast;
use crate::schema::OperationKind;
use crate::schema::SchemaDocument;
use std::collections::HashMap;

/// The operations and fragment definitions of one parsed query document.
#[derive(Debug)]
pub struct QueryContext<'doc> {
    fragments: HashMap<&'doc str, &'doc ast::operation::FragmentDefinition>,
    operations: Vec<OperationParts<'doc>>,
}

/// The pieces of an operation definition the annotator walks.
#[derive(Clone, Copy, Debug)]
pub struct OperationParts<'doc> {
    pub kind: OperationKind,
    pub selection_set: &'doc ast::operation::SelectionSet,
    pub variable_definitions: &'doc [ast::operation::VariableDefinition],
}

impl<'doc> QueryContext<'doc> {
    pub fn new(document: &'doc ast::operation::Document) -> Self {
        let mut fragments = HashMap::new();
        let mut operations = vec![];
        for def in &document.definitions {
            match def {
                ast::operation::Definition::Fragment(frag) => {
                    fragments.insert(frag.name.as_str(), frag);
                },
                ast::operation::Definition::Operation(op) =>
                    operations.push(OperationParts::from_ast(op)),
            }
        }
        Self { fragments, operations }
    }

    pub fn fragment(&self, name: &str) -> Option<&'doc ast::operation::FragmentDefinition> {
        self.fragments.get(name).copied()
    }

    pub fn operations(&self) -> &[OperationParts<'doc>] {
        self.operations.as_slice()
    }
}

impl<'doc> OperationParts<'doc> {
    fn from_ast(op: &'doc ast::operation::OperationDefinition) -> Self {
        use ast::operation::OperationDefinition;
        let (selection_set, variable_definitions): (
            &ast::operation::SelectionSet,
            &[ast::operation::VariableDefinition],
        ) = match op {
            OperationDefinition::Mutation(m) =>
                (&m.selection_set, m.variable_definitions.as_slice()),
            OperationDefinition::Query(q) =>
                (&q.selection_set, q.variable_definitions.as_slice()),
            OperationDefinition::SelectionSet(ss) =>
                (ss, &[]),
            OperationDefinition::Subscription(s) =>
                (&s.selection_set, s.variable_definitions.as_slice()),
        };
        Self {
            kind: op.into(),
            selection_set,
            variable_definitions,
        }
    }
}

/// The type a fragment's selections apply to: its type condition when the
/// schema defines that type, else the enclosing type.
pub(crate) fn narrowed_type<'a>(
    schema: &SchemaDocument,
    type_condition: Option<&'a ast::operation::TypeCondition>,
    parent_type: &'a str,
) -> &'a str {
    match type_condition {
        Some(ast::operation::TypeCondition::On(type_name))
            if schema.contains_type(type_name) => type_name.as_str(),
        _ => parent_type,
    }
}
