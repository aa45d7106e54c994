//! Static recommendation catalogs.
//!
//! Entry order is significant: fallback slices are positional.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProblemDifficulty {
    Easy,
    Medium,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub difficulty: ProjectLevel,
    pub estimated_time: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: &'static str,
    pub description: &'static str,
    pub required_skills: &'static [&'static str],
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub hiring: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Problem {
    pub title: &'static str,
    pub difficulty: ProblemDifficulty,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub link: &'static str,
    pub topics: &'static [&'static str],
}

pub static PROJECTS: [Project; 8] = [
    Project {
        title: "E-commerce Platform",
        description: "Build a full-stack e-commerce website with user authentication, product catalog, and payment integration",
        skills: &["React", "Node.js", "JavaScript", "MongoDB", "Express", "Web Development", "Frontend", "Backend"],
        difficulty: ProjectLevel::Intermediate,
        estimated_time: "4-6 weeks",
    },
    Project {
        title: "Task Management App",
        description: "Create a collaborative task management application with real-time updates",
        skills: &["React", "Firebase", "JavaScript", "CSS", "Web Development", "Frontend"],
        difficulty: ProjectLevel::Beginner,
        estimated_time: "2-3 weeks",
    },
    Project {
        title: "Data Visualization Dashboard",
        description: "Build an interactive dashboard for data analysis with charts and graphs",
        skills: &["Python", "React", "D3.js", "Data Science", "JavaScript", "Analytics", "Visualization"],
        difficulty: ProjectLevel::Advanced,
        estimated_time: "3-4 weeks",
    },
    Project {
        title: "Social Media App",
        description: "Develop a social networking platform with posts, comments, and user profiles",
        skills: &["React", "Node.js", "MongoDB", "Socket.io", "JavaScript", "Web Development", "Full Stack"],
        difficulty: ProjectLevel::Intermediate,
        estimated_time: "5-7 weeks",
    },
    Project {
        title: "Portfolio Website",
        description: "Create a responsive portfolio website to showcase your projects and skills",
        skills: &["HTML", "CSS", "JavaScript", "React", "Web Development", "Frontend", "Design"],
        difficulty: ProjectLevel::Beginner,
        estimated_time: "1-2 weeks",
    },
    Project {
        title: "Weather App",
        description: "Build a weather application with location-based forecasts and maps",
        skills: &["JavaScript", "React", "API Integration", "CSS", "Web Development", "Frontend"],
        difficulty: ProjectLevel::Beginner,
        estimated_time: "1-2 weeks",
    },
    Project {
        title: "Calculator App",
        description: "Create a scientific calculator with advanced mathematical functions",
        skills: &["JavaScript", "HTML", "CSS", "Math", "Programming", "Basic"],
        difficulty: ProjectLevel::Beginner,
        estimated_time: "1 week",
    },
    Project {
        title: "Todo List Application",
        description: "Build a feature-rich todo list with categories, priorities, and due dates",
        skills: &["Programming", "JavaScript", "Web Development", "Basic", "Frontend"],
        difficulty: ProjectLevel::Beginner,
        estimated_time: "1-2 weeks",
    },
];

pub static COMPANIES: [Company; 8] = [
    Company {
        name: "Google",
        description: "Search, Cloud, AI, and Software solutions",
        required_skills: &["JavaScript", "Python", "Java", "React", "Machine Learning", "Programming", "Web Development"],
        kind: "Tech Giant",
        hiring: true,
    },
    Company {
        name: "Microsoft",
        description: "Cloud computing, productivity software, and enterprise solutions",
        required_skills: &["C#", "Azure", "JavaScript", "React", "Python", "Programming", "Web Development"],
        kind: "Tech Giant",
        hiring: true,
    },
    Company {
        name: "Amazon",
        description: "E-commerce, cloud services, and technology infrastructure",
        required_skills: &["Java", "Python", "AWS", "JavaScript", "Node.js", "Programming", "Web Development"],
        kind: "Tech Giant",
        hiring: true,
    },
    Company {
        name: "Netflix",
        description: "Streaming platform and content technology",
        required_skills: &["React", "Node.js", "Python", "Java", "Microservices", "Web Development", "Programming"],
        kind: "Entertainment Tech",
        hiring: true,
    },
    Company {
        name: "Spotify",
        description: "Music streaming and audio technology",
        required_skills: &["React", "Python", "Java", "Machine Learning", "Backend", "Programming", "Web Development"],
        kind: "Entertainment Tech",
        hiring: true,
    },
    Company {
        name: "Airbnb",
        description: "Travel and hospitality technology platform",
        required_skills: &["React", "Ruby", "JavaScript", "iOS", "Android", "Web Development", "Programming"],
        kind: "Platform",
        hiring: true,
    },
    Company {
        name: "Accenture",
        description: "Global consulting and technology services",
        required_skills: &["Programming", "Web Development", "Basic", "JavaScript", "Java", "Consulting"],
        kind: "Consulting",
        hiring: true,
    },
    Company {
        name: "TCS",
        description: "IT services and consulting company",
        required_skills: &["Programming", "Web Development", "Java", "JavaScript", "Basic", "IT Services"],
        kind: "IT Services",
        hiring: true,
    },
];

pub static PROBLEMS: [Problem; 8] = [
    Problem {
        title: "Two Sum",
        difficulty: ProblemDifficulty::Easy,
        description: "Find two numbers in an array that add up to a target sum",
        skills: &["Arrays", "Hash Table", "JavaScript", "Python", "Programming", "Basic", "Data Structures"],
        link: "https://leetcode.com/problems/two-sum/",
        topics: &["Array", "Hash Table"],
    },
    Problem {
        title: "Valid Parentheses",
        difficulty: ProblemDifficulty::Easy,
        description: "Determine if input string has valid parentheses",
        skills: &["Stack", "String", "JavaScript", "Python", "Programming", "Basic", "Data Structures"],
        link: "https://leetcode.com/problems/valid-parentheses/",
        topics: &["Stack", "String"],
    },
    Problem {
        title: "Binary Tree Inorder Traversal",
        difficulty: ProblemDifficulty::Easy,
        description: "Return inorder traversal of binary tree",
        skills: &["Tree", "Recursion", "JavaScript", "Python", "Programming", "Data Structures"],
        link: "https://leetcode.com/problems/binary-tree-inorder-traversal/",
        topics: &["Tree", "Recursion"],
    },
    Problem {
        title: "Longest Substring Without Repeating Characters",
        difficulty: ProblemDifficulty::Medium,
        description: "Find length of longest substring without repeating characters",
        skills: &["String", "Sliding Window", "JavaScript", "Python", "Programming", "Algorithms"],
        link: "https://leetcode.com/problems/longest-substring-without-repeating-characters/",
        topics: &["String", "Sliding Window"],
    },
    Problem {
        title: "Add Two Numbers",
        difficulty: ProblemDifficulty::Medium,
        description: "Add two numbers represented as linked lists",
        skills: &["Linked List", "Math", "JavaScript", "Python", "Programming", "Data Structures"],
        link: "https://leetcode.com/problems/add-two-numbers/",
        topics: &["Linked List", "Math"],
    },
    Problem {
        title: "Container With Most Water",
        difficulty: ProblemDifficulty::Medium,
        description: "Find container that can hold the most water",
        skills: &["Array", "Two Pointers", "JavaScript", "Python", "Programming", "Algorithms"],
        link: "https://leetcode.com/problems/container-with-most-water/",
        topics: &["Array", "Two Pointers"],
    },
    Problem {
        title: "Palindrome Number",
        difficulty: ProblemDifficulty::Easy,
        description: "Determine whether an integer is a palindrome",
        skills: &["Math", "Programming", "Basic", "JavaScript", "Python"],
        link: "https://leetcode.com/problems/palindrome-number/",
        topics: &["Math"],
    },
    Problem {
        title: "Reverse Integer",
        difficulty: ProblemDifficulty::Medium,
        description: "Reverse digits of a 32-bit signed integer",
        skills: &["Math", "Programming", "Basic", "JavaScript", "Python"],
        link: "https://leetcode.com/problems/reverse-integer/",
        topics: &["Math"],
    },
];
