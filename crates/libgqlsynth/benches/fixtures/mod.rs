/// A schema of `type_count` entity types where each type links to the next
/// two (wrapping around) and every type has a `...Page` root field.
pub fn chained_schema(type_count: usize) -> String {
    let mut sdl = String::new();
    for idx in 0..type_count {
        let next = (idx + 1) % type_count;
        let skip = (idx + 2) % type_count;
        sdl.push_str(&format!(
            "\"\"\"Entity number {idx}\"\"\"\n\
            type Entity{idx} {{\n  \
              id: ID!\n  \
              \"Display name\"\n  \
              name: String\n  \
              createdAt: String\n  \
              next: Entity{next}\n  \
              skipOne: [Entity{skip}!]\n\
            }}\n\n"
        ));
    }
    sdl.push_str("input EntityFilter {\n  name: String\n  _and: [EntityFilter!]\n}\n\n");
    sdl.push_str("type Query {\n");
    for idx in 0..type_count {
        sdl.push_str(&format!(
            "  entity{idx}Page(skip: Int, limit: Int, where: EntityFilter): [Entity{idx}!]!\n"
        ));
    }
    sdl.push_str("}\n");
    sdl
}
