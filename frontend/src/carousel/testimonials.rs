use std::num::NonZeroUsize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub text: &'static str,
    pub rating: u8,
    pub highlight: &'static str,
    pub results: &'static str,
}

impl Testimonial {
    /// First letter of each part of the name, e.g. "Babá Ana" -> "BA".
    pub fn initials(&self) -> String {
        self.name
            .split(' ')
            .filter_map(|part| part.chars().next())
            .collect()
    }

    /// Opening of the text for the grid cards.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let head: String = self.text.chars().take(max_chars).collect();
        format!("{}...", head)
    }

    pub fn stars(&self) -> usize {
        usize::from(self.rating.clamp(1, 5))
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Fernanda",
        role: "Profissional em Crescimento",
        text: "Em apenas 2 dias, me senti mais segura do meu valor e já marquei uma conversa com minha chefe para falar sobre o meu crescimento. Obrigada pelo carinho e por um aprendizado que já está fazendo a diferença!",
        rating: 5,
        highlight: "Segurança em 2 dias",
        results: "Conversa sobre crescimento profissional agendada",
    },
    Testimonial {
        name: "Babá Ana",
        role: "Cuidadora Certificada",
        text: "Confesso que estava com um friozão na barriga, mas depois do curso estou muito mais confiante e determinada. A experiência foi maravilhosa - tirei todas as minhas dúvidas e foi uma troca incrível. Agradeço à Carla pela paciência, energia acolhedora e por ser essa pessoa fantástica que transforma insegurança em força!",
        rating: 5,
        highlight: "De insegura a confiante",
        results: "Insegurança transformada em força",
    },
    Testimonial {
        name: "Babá Cristina",
        role: "Cuidadora Especializada",
        text: "Uma das experiências mais incríveis da minha vida! Na Bebê Sitter, não busco apenas passar confiança aos pais, mas criar um ambiente onde cada criança possa ser verdadeiramente quem é, sem medo de julgamentos. Ser babá vai muito além de um trabalho - é vestir amor, carinho e dedicação, adaptando-se ao mundo mágico dos pequenos e vivendo cada aventura com eles.",
        rating: 5,
        highlight: "Conexão verdadeira com crianças",
        results: "Transformação de vida profissional",
    },
    Testimonial {
        name: "Sitter Tainara",
        role: "Cuidadora Certificada",
        text: "O curso foi muito além do que eu esperava! Achei que só aprenderia cuidados básicos, mas saí totalmente segura para lidar com QUALQUER situação. A didática é maravilhosa e o melhor: comprei um curso de babá e ganhei um de psicologia infantil de brinde! Uma experiência completa que entregou muito mais do que prometeu!",
        rating: 5,
        highlight: "Superou todas as expectativas",
        results: "Segurança total para qualquer situação",
    },
    Testimonial {
        name: "Aluna do Curso Bebê Sitter",
        role: "Cuidadora Experiente",
        text: "Eu achava que já sabia tudo sobre cuidar de crianças, mas o curso agregou muito ao meu conhecimento. Amei aprender sobre nutrição, estimulação infantil e primeiros socorros - coisas que nem imaginava que eram tão necessárias. Agora me sinto de fato preparada e confiante para trabalhar.",
        rating: 5,
        highlight: "Conhecimento transformador",
        results: "Preparação e confiança total",
    },
    Testimonial {
        name: "Camila",
        role: "Babá na Suíça - Zurique",
        text: "Trabalho em Zurique e as famílias daqui são extremamente exigentes. O curso da Bebê Sitter me deu a base técnica que faltava - principalmente sobre estimulação infantil e protocolos de segurança - que foram decisivos na minha contratação. Agradeço por me equipar para um mercado que valoriza a qualificação real.",
        rating: 5,
        highlight: "Validado no rigor suíço",
        results: "Contratação internacional conquistada",
    },
    Testimonial {
        name: "Letícia",
        role: "Babá em Londres - Inglaterra",
        text: "Mesmo com experiência, sentia que precisava de mais embasamento para trabalhar em Londres. O curso superou expectativas: a parte de psicologia infantil e nutrição foram diferenciais no meu processo seletivo com uma família britânica. Hoje me sinto segura para atuar em qualquer cenário.",
        rating: 5,
        highlight: "Reconhecimento no Reino Unido",
        results: "Aprovada em processo seletivo britânico",
    },
    Testimonial {
        name: "Ana",
        role: "Babá na Alemanha - Berlim",
        text: "Trabalhar em Berlim exige precisão e conhecimento comprovado. Os módulos de primeiros socorros e desenvolvimento infantil do curso foram exatamente o que precisei para comprovar minha qualificação. O método é completo e me deu confiança até para explicar minha abordagem em entrevistas.",
        rating: 5,
        highlight: "Padrões alemães atendidos",
        results: "Qualificação comprovada internacionalmente",
    },
    Testimonial {
        name: "Fernanda",
        role: "Babá nos EUA - Miami",
        text: "Mudei para Miami e precisei me adaptar a uma nova cultura de cuidados. O curso não só me ensinou técnicas universais, como também me mostrou como comunicar minha metodologia com clareza - o que fez toda diferença na minha contratação por uma família americana.",
        rating: 5,
        highlight: "Destaque no mercado americano",
        results: "Contratação por família americana",
    },
    Testimonial {
        name: "Renata",
        role: "Babá no Canadá - Toronto",
        text: "Em Toronto, a qualificação é levada muito a sério. O curso me surpreendeu pela abordagem prática e psicológica - itens essenciais que as agências daqui valorizam. Consegui minha certificação local com muito mais facilidade graças à base sólida que adquiri.",
        rating: 5,
        highlight: "Certificação que abre portas",
        results: "Certificação local conquistada facilmente",
    },
];

/// Fails the build if the list above is ever emptied.
pub const TESTIMONIAL_COUNT: NonZeroUsize = match NonZeroUsize::new(TESTIMONIALS.len()) {
    Some(count) => count,
    None => panic!("testimonial list must not be empty"),
};
