use serenity::all::{Colour, CreateEmbed, CreateEmbedFooter};

use crate::view_state::id::{EvosQuery, IdViewState, MaterialsQuery, PaneData, PantheonQuery};
use crate::views::{monster_lines, query_footer_text};

pub struct IdView;

impl IdView {
    pub fn embed(state: &IdViewState) -> CreateEmbed {
        let monster = &state.monster;
        let title = format!("#{} {}", monster.monster_id, monster.name_en);
        let embed = CreateEmbed::new()
            .title(title)
            .color(Colour::DARK_TEAL)
            .footer(CreateEmbedFooter::new(Self::footer_text(state)));

        match &state.pane {
            PaneData::Id => embed
                .description(format!("{}\u{2605}", monster.rarity))
                .field("Stats", Self::stats(state), false),
            PaneData::Evos(evos) => Self::evos(embed, evos),
            PaneData::Materials(mats) => Self::materials(embed, mats),
            PaneData::Pic => match &monster.image_url {
                Some(url) => embed.image(url),
                None => embed.description("No picture available."),
            },
            PaneData::Pantheon(pantheon) => Self::pantheon(embed, pantheon),
            PaneData::OtherInfo => embed
                .field("Series", monster.series_name.as_deref().unwrap_or("None"), true)
                .field("Base evolution", format!("#{}", monster.base_evo_id), true),
        }
    }

    /// Child menus point back at the list they were picked from.
    pub fn footer_text(state: &IdViewState) -> String {
        let text = query_footer_text(&state.query);
        if state.is_child {
            format!("{} | Selected from the list above", text)
        } else {
            text
        }
    }

    fn stats(state: &IdViewState) -> String {
        let m = &state.monster;
        format!("HP {} | ATK {} | RCV {}", m.hp, m.atk, m.rcv)
    }

    fn evos(embed: CreateEmbed, evos: &EvosQuery) -> CreateEmbed {
        if evos.is_empty() {
            return embed.description("No alternate evolutions.");
        }
        let mut embed = embed;
        if let Some(alt_versions) = &evos.alt_versions {
            embed = embed.field("Evolutions", monster_lines(alt_versions), false);
        }
        if let Some(gem_versions) = &evos.gem_versions {
            embed = embed.field("Evo gems", monster_lines(gem_versions), false);
        }
        embed
    }

    fn materials(embed: CreateEmbed, mats: &MaterialsQuery) -> CreateEmbed {
        if mats.is_empty() {
            return embed.description("No material data.");
        }
        let mut embed = embed;
        if let Some(evo_mats) = &mats.mats {
            embed = embed.field("Evo materials", monster_lines(evo_mats), false);
        }
        if let Some(used_in) = &mats.used_in {
            embed = embed.field("Material for", monster_lines(used_in), false);
        }
        if let Some(gem_id) = mats.gem_id {
            embed = embed.field("Evo gem", format!("`#{}`", gem_id), false);
        }
        if let Some(skillups) = &mats.skillups {
            embed = embed.field("Skill ups", monster_lines(skillups), false);
        }
        embed
    }

    fn pantheon(embed: CreateEmbed, pantheon: &PantheonQuery) -> CreateEmbed {
        let Some(members) = &pantheon.pantheon_list else {
            return embed.description("No pantheon.");
        };
        let name = pantheon.series_name.as_deref().unwrap_or("Pantheon");
        embed.field(name, monster_lines(members), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monster_data::tests::monster;

    fn state(is_child: bool) -> IdViewState {
        IdViewState {
            monster: monster(1, "Tyrra", 1),
            query: "tyr".to_string(),
            is_child,
            reaction_list: Vec::new(),
            pane: PaneData::Id,
        }
    }

    #[test]
    fn child_footer_mentions_the_list() {
        assert_eq!(IdView::footer_text(&state(false)), "Requested with query: tyr");
        assert_eq!(
            IdView::footer_text(&state(true)),
            "Requested with query: tyr | Selected from the list above"
        );
    }
}
